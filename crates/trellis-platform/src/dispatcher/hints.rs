//! Hint label generation and matching.

/// Result of feeding one character to a [`HintSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// `typed` is a proper prefix of at least one label.
    Partial,
    /// `typed` equals the label at this target index.
    Commit(usize),
    /// No label starts with `typed`.
    NoMatch,
    /// Targets have not been reported yet; the character was buffered.
    Waiting,
}

/// Builds `count` prefix-free labels over `alphabet`.
///
/// Counts up to the alphabet size get single characters in alphabet order;
/// larger counts use the shortest fixed length that fits.
pub fn generate_labels(alphabet: &[char], count: usize) -> Vec<String> {
    let base = alphabet.len();
    if count == 0 || base == 0 {
        return Vec::new();
    }
    if base == 1 {
        // A single-letter alphabet can only label one target prefix-free.
        return vec![alphabet[0].to_string()];
    }

    let mut length = 1u32;
    while base.checked_pow(length).is_some_and(|p| p < count) {
        length += 1;
    }

    (0..count)
        .map(|mut n| {
            let mut label = vec![alphabet[0]; length as usize];
            for slot in label.iter_mut().rev() {
                *slot = alphabet[n % base];
                n /= base;
            }
            label.into_iter().collect()
        })
        .collect()
}

/// One pane's active hint mode.
#[derive(Debug, Clone, Default)]
pub struct HintSession {
    labels: Vec<String>,
    typed: String,
    targets_known: bool,
}

impl HintSession {
    /// A session waiting for the page to report its hint targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns labels for `count` targets and re-checks anything typed early.
    pub fn set_targets(&mut self, alphabet: &[char], count: usize) -> HintOutcome {
        self.labels = generate_labels(alphabet, count);
        self.targets_known = true;
        if self.typed.is_empty() {
            if self.labels.is_empty() {
                HintOutcome::NoMatch
            } else {
                HintOutcome::Partial
            }
        } else {
            self.check()
        }
    }

    pub fn feed(&mut self, c: char) -> HintOutcome {
        self.typed.push(c);
        if !self.targets_known {
            return HintOutcome::Waiting;
        }
        self.check()
    }

    fn check(&self) -> HintOutcome {
        if let Some(index) = self.labels.iter().position(|l| *l == self.typed) {
            return HintOutcome::Commit(index);
        }
        if self.labels.iter().any(|l| l.starts_with(&self.typed)) {
            HintOutcome::Partial
        } else {
            HintOutcome::NoMatch
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn targets_known(&self) -> bool {
        self.targets_known
    }

    /// Labels still reachable from what has been typed.
    pub fn matching(&self) -> Vec<&str> {
        self.labels
            .iter()
            .filter(|l| l.starts_with(&self.typed))
            .map(String::as_str)
            .collect()
    }
}
