mod article;
mod round;
mod target;

pub use article::{Article, ArticleError, HEADLINE_SEPARATOR, UNKNOWN_SOURCE, split_headline};
pub use round::{GuessOutcome, MASK_CHAR, RoundState, masked_headline};
pub use target::{MIN_TARGET_LEN, clean_word, derive_target, is_title_case};
