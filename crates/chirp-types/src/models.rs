/// A recognized counter action on a tweet.
///
/// Parsing is lenient: an unrecognized action string is `None`, which
/// callers treat as a no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweetAction {
    Like,
    Retweet,
    Share,
}

impl TweetAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "retweet" => Some(Self::Retweet),
            "share" => Some(Self::Share),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        assert_eq!(TweetAction::parse("like"), Some(TweetAction::Like));
        assert_eq!(TweetAction::parse("retweet"), Some(TweetAction::Retweet));
        assert_eq!(TweetAction::parse("share"), Some(TweetAction::Share));
    }

    #[test]
    fn unknown_action_is_none() {
        assert_eq!(TweetAction::parse("boost"), None);
        assert_eq!(TweetAction::parse(""), None);
        assert_eq!(TweetAction::parse("Like"), None);
    }
}
