/// String similarity score, higher is more similar
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Normalized indel similarity in `0.0..=100.0`.
///
/// `100 * 2 * lcs(a, b) / (len(a) + len(b))`, where `lcs` is the longest
/// common subsequence over chars. Two empty strings score 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl Similarity for IndelRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 100.0;
        }

        100.0 * (2 * lcs_len(&a, &b)) as f64 / total as f64
    }
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub score: f64,
}

/// "Did you mean" ranking over a fixed word list
pub struct SuggestionResolver {
    scorer: Box<dyn Similarity>,
}

impl SuggestionResolver {
    pub fn new(scorer: Box<dyn Similarity>) -> Self {
        Self { scorer }
    }

    /// Top `n` words by score. Equal scores keep word list order.
    pub fn suggest(&self, query: &str, words: &[String], n: usize) -> Vec<Suggestion> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<Suggestion> = words
            .iter()
            .map(|word| Suggestion {
                word: word.clone(),
                score: self.scorer.score(query, word),
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(n);
        ranked
    }
}

impl Default for SuggestionResolver {
    fn default() -> Self {
        Self::new(Box::new(IndelRatio))
    }
}
