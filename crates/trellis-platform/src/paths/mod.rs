mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, config_file, crash_report_dir, data_dir, session_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_app_name() {
        let path = config_dir().unwrap();
        assert!(path.ends_with("trellis"), "got: {path:?}");
    }

    #[test]
    fn config_file_has_correct_name() {
        let path = config_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
        assert!(path.parent().unwrap().ends_with("trellis"));
    }

    #[test]
    fn session_file_lives_in_data_dir() {
        let session = session_file().unwrap();
        let data = data_dir().unwrap();
        assert!(session.starts_with(&data));
        assert_eq!(session.file_name().unwrap().to_str().unwrap(), "session.json");
    }

    #[test]
    fn crash_reports_live_under_logs() {
        let dir = crash_report_dir().unwrap();
        assert!(dir.starts_with(data_dir().unwrap()));
        assert!(dir.ends_with("logs/crash-reports"));
    }
}
