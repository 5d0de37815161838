//! Completion candidates and cycling state

use tracing::debug;

use crate::messages::Direction;

/// Longest string that is a prefix of every item. Empty for an empty list.
pub fn longest_common_prefix<S: AsRef<str>>(items: &[S]) -> &str {
    let Some((first, rest)) = items.split_first() else {
        return "";
    };
    let first = first.as_ref();
    let mut end = first.len();

    for item in rest {
        end = first[..end]
            .chars()
            .zip(item.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        if end == 0 {
            break;
        }
    }

    &first[..end]
}

/// What the editor has to do after new candidates arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatesInstalled {
    /// Common prefix to insert into the buffer right away
    pub insert_prefix: Option<String>,
    /// Propose the first candidate (an implicit "cycle next")
    pub propose_first: bool,
}

/// Candidate list and cycling index for one completion interaction.
///
/// `index` is only meaningful while `candidates` is non-empty; `requested`
/// is true from the moment a request is issued until the next reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    candidates: Vec<String>,
    requested: bool,
    index: Option<usize>,
    pending_request: Option<u64>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.candidates.clear();
        self.requested = false;
        self.index = None;
        self.pending_request = None;
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Id of the request still waiting for an answer
    pub fn pending_request(&self) -> Option<u64> {
        self.pending_request
    }

    pub fn mark_requested(&mut self, request_id: u64) {
        self.requested = true;
        self.pending_request = Some(request_id);
    }

    /// Store `candidates` in caller order.
    ///
    /// With `auto_accept_prefix` and an active request, the longest common
    /// prefix is handed back for insertion and stripped from every
    /// candidate; if that leaves nothing but empty strings the state resets.
    pub fn install(
        &mut self,
        candidates: Vec<String>,
        auto_accept_prefix: bool,
    ) -> CandidatesInstalled {
        self.pending_request = None;
        self.index = None;
        self.candidates = candidates;

        let mut installed = CandidatesInstalled::default();

        if auto_accept_prefix && self.requested {
            let lcp = longest_common_prefix(&self.candidates).to_string();
            if !lcp.is_empty() {
                for candidate in &mut self.candidates {
                    candidate.replace_range(..lcp.len(), "");
                }
                debug!(target: "completion", prefix = %lcp, "auto-accepting common prefix");
                installed.insert_prefix = Some(lcp);

                if self.candidates.iter().all(String::is_empty) {
                    debug!(target: "completion", "completion exhausted by common prefix");
                    self.reset();
                    return installed;
                }
            }
        }

        installed.propose_first = self.requested && self.has_candidates();
        installed
    }

    /// Move to the previous/next candidate. Out of range is a no-op (no wrap).
    pub fn cycle(&mut self, direction: Direction) -> Option<&str> {
        let target = match (self.index, direction) {
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => return None,
            (Some(i), _) => i.checked_add_signed(direction.delta())?,
        };
        if target >= self.candidates.len() {
            return None;
        }
        self.index = Some(target);
        Some(&self.candidates[target])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_longest_common_prefix() {
        assert_eq!(longest_common_prefix::<String>(&[]), "");
        assert_eq!(longest_common_prefix(&["oo", "op"]), "o");
        assert_eq!(longest_common_prefix(&["stash", "status", "stage"]), "sta");
        assert_eq!(longest_common_prefix(&["x"]), "x");
        assert_eq!(longest_common_prefix(&["abc", "xyz"]), "");
    }

    #[test]
    fn test_longest_common_prefix_shorter_item_bounds_result() {
        assert_eq!(longest_common_prefix(&["foobar", "foo"]), "foo");
        assert_eq!(longest_common_prefix(&["foo", "foobar", ""]), "");
    }

    #[test]
    fn test_longest_common_prefix_multibyte() {
        assert_eq!(longest_common_prefix(&["héllo", "hélp"]), "hél");
    }

    #[test]
    fn test_install_strips_common_prefix() {
        let mut c = CompletionState::new();
        c.mark_requested(1);

        let installed = c.install(strings(&["oo", "op"]), true);
        assert_eq!(installed.insert_prefix.as_deref(), Some("o"));
        assert!(installed.propose_first);
        assert_eq!(c.candidates(), &strings(&["o", "p"])[..]);
        assert_eq!(c.pending_request(), None);
    }

    #[test]
    fn test_install_single_candidate_exhausts() {
        let mut c = CompletionState::new();
        c.mark_requested(1);

        let installed = c.install(strings(&["x"]), true);
        assert_eq!(installed.insert_prefix.as_deref(), Some("x"));
        assert!(!installed.propose_first);
        assert!(!c.has_candidates());
        assert!(!c.is_requested());
    }

    #[test]
    fn test_install_without_auto_accept_proposes_first() {
        let mut c = CompletionState::new();
        c.mark_requested(4);

        let installed = c.install(strings(&["oo", "op"]), false);
        assert_eq!(installed.insert_prefix, None);
        assert!(installed.propose_first);
        assert_eq!(c.candidates(), &strings(&["oo", "op"])[..]);
    }

    #[test]
    fn test_install_unrequested_is_passive() {
        let mut c = CompletionState::new();
        let installed = c.install(strings(&["oo", "op"]), true);
        assert_eq!(installed, CandidatesInstalled::default());
        assert_eq!(c.candidates().len(), 2);
    }

    #[test]
    fn test_cycle_does_not_wrap() {
        let mut c = CompletionState::new();
        c.install(strings(&["a", "b"]), true);

        assert_eq!(c.cycle(Direction::Backward), None);
        assert_eq!(c.index(), None);
        assert_eq!(c.cycle(Direction::Forward), Some("a"));
        assert_eq!(c.cycle(Direction::Forward), Some("b"));
        assert_eq!(c.cycle(Direction::Forward), None);
        assert_eq!(c.index(), Some(1));
        assert_eq!(c.cycle(Direction::Backward), Some("a"));
        assert_eq!(c.cycle(Direction::Backward), None);
        assert_eq!(c.index(), Some(0));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut c = CompletionState::new();
        c.mark_requested(2);
        c.install(strings(&["a", "b"]), false);
        c.cycle(Direction::Forward);

        c.reset();
        let once = c.clone();
        c.reset();
        assert_eq!(c, once);
        assert_eq!(c, CompletionState::new());
    }
}
