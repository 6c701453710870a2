/// Picks the authoritative candidate out of a search response.
///
/// Both the maps client and the Wikipedia client take one; they default to [`FirstCandidate`].
pub trait CandidateSelector<T>: Send + Sync {
    fn select(&self, candidates: Vec<T>) -> Option<T>;
}

/// 第一筆結果即為答案，不做評分
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl<T> CandidateSelector<T> for FirstCandidate {
    fn select(&self, candidates: Vec<T>) -> Option<T> {
        candidates.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate() {
        assert_eq!(FirstCandidate.select(vec![3, 1, 2]), Some(3));
        assert_eq!(FirstCandidate.select(Vec::<i32>::new()), None);
    }
}
