//! Token substitution for view URL templates
//!
//! URL templates in the view catalog carry placeholder tokens drawn from a
//! fixed vocabulary (e.g. `<opinion_id>`). At crawl time each token is
//! replaced with a caller-supplied value. Substitution is a single
//! left-to-right scan: replaced values are never rescanned, so a value that
//! happens to contain another token's literal text passes through verbatim.

use std::fmt;

/// The closed vocabulary of placeholder tokens recognized in URL templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Username,
    OpinionId,
    CommentId,
    OpinionPreId,
    OpinionPostId,
    OpinionUaId,
    CommentPreId,
    CommentPostId,
    CommentUaId,
}

impl Token {
    /// All tokens, in the fixed order substitutions are applied
    pub const ALL: [Token; 9] = [
        Token::Username,
        Token::OpinionId,
        Token::CommentId,
        Token::OpinionPreId,
        Token::OpinionPostId,
        Token::OpinionUaId,
        Token::CommentPreId,
        Token::CommentPostId,
        Token::CommentUaId,
    ];

    /// The literal placeholder text as it appears in URL templates
    pub fn tag(&self) -> &'static str {
        match self {
            Token::Username => "<username>",
            Token::OpinionId => "<opinion_id>",
            Token::CommentId => "<comment_id>",
            Token::OpinionPreId => "<opinion_pre_id>",
            Token::OpinionPostId => "<opinion_post_id>",
            Token::OpinionUaId => "<opinion_ua_id>",
            Token::CommentPreId => "<comment_pre_id>",
            Token::CommentPostId => "<comment_post_id>",
            Token::CommentUaId => "<comment_ua_id>",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// An ordered sequence of (token, value) pairs
///
/// Order matters: the substitution scan tries pairs in sequence at each
/// template position, so earlier pairs win if two tags could both match.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    pairs: Vec<(Token, String)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a (token, value) pair
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> &mut Self {
        self.pairs.push((token, value.into()));
        self
    }

    pub fn pairs(&self) -> &[(Token, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Substitutes token placeholders in a URL template
///
/// Performs one left-to-right pass over `template`. At each position the
/// pairs in `map` are tried in order; on a match the value is emitted and
/// the scan resumes after the tag. Emitted values are not rescanned, so
/// substitution is never applied recursively. Tokens absent from the
/// template are skipped silently; tags with no supplied value are passed
/// through literally (the fail-late policy: navigation reports them).
pub fn substitute(template: &str, map: &TokenMap) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (token, value) in map.pairs() {
            let tag = token.tag();
            if rest.starts_with(tag) {
                out.push_str(value);
                rest = &rest[tag.len()..];
                continue 'scan;
            }
        }
        // No tag matches at this position; emit one char and advance
        match rest.chars().next() {
            Some(ch) => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
            None => break,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(Token, &str)]) -> TokenMap {
        let mut map = TokenMap::new();
        for (token, value) in pairs {
            map.insert(*token, *value);
        }
        map
    }

    #[test]
    fn test_substitute_single_token() {
        let map = map_of(&[(Token::OpinionId, "42")]);
        assert_eq!(
            substitute("/opinions/<opinion_id>/?mode=read-only", &map),
            "/opinions/42/?mode=read-only"
        );
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let map = map_of(&[(Token::Username, "alice")]);
        assert_eq!(
            substitute("/users/<username>/posts/<username>/", &map),
            "/users/alice/posts/alice/"
        );
    }

    #[test]
    fn test_absent_tokens_are_a_noop() {
        let map = map_of(&[(Token::CommentId, "7"), (Token::Username, "bob")]);
        let template = "/opinions/?pinned=yes";
        assert_eq!(substitute(template, &map), template);
    }

    #[test]
    fn test_empty_map_is_a_noop() {
        let template = "/opinions/<opinion_id>/";
        assert_eq!(substitute(template, &TokenMap::new()), template);
    }

    #[test]
    fn test_unsupplied_tags_pass_through() {
        let map = map_of(&[(Token::Username, "carol")]);
        assert_eq!(
            substitute("/opinions/<opinion_id>/?author=<username>", &map),
            "/opinions/<opinion_id>/?author=carol"
        );
    }

    #[test]
    fn test_values_are_never_rescanned() {
        // A value containing another token's literal text must pass through
        // verbatim, not get substituted in turn.
        let map = map_of(&[
            (Token::Username, "<opinion_id>"),
            (Token::OpinionId, "42"),
        ]);
        assert_eq!(
            substitute("/users/<username>/", &map),
            "/users/<opinion_id>/"
        );
    }

    #[test]
    fn test_multiple_tokens_in_one_template() {
        let map = map_of(&[(Token::Username, "dave"), (Token::OpinionId, "9")]);
        assert_eq!(
            substitute("/opinions/<opinion_id>/?author=<username>&status=all", &map),
            "/opinions/9/?author=dave&status=all"
        );
    }

    #[test]
    fn test_no_angle_brackets_remain_with_complete_map() {
        let mut map = TokenMap::new();
        map.insert(Token::Username, "u");
        map.insert(Token::OpinionId, "1");
        map.insert(Token::CommentId, "2");
        map.insert(Token::OpinionPreId, "3");
        map.insert(Token::OpinionPostId, "4");
        map.insert(Token::OpinionUaId, "5");
        map.insert(Token::CommentPreId, "6");
        map.insert(Token::CommentPostId, "7");
        map.insert(Token::CommentUaId, "8");

        for token in Token::ALL {
            let template = format!("/x/{}/", token.tag());
            let result = substitute(&template, &map);
            assert!(
                !result.contains('<') && !result.contains('>'),
                "token {} left placeholder text in {}",
                token.tag(),
                result
            );
        }
    }

    #[test]
    fn test_tags_are_unique() {
        for i in 0..Token::ALL.len() {
            for j in (i + 1)..Token::ALL.len() {
                assert_ne!(Token::ALL[i].tag(), Token::ALL[j].tag());
            }
        }
    }
}
