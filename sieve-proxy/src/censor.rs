use crate::config::ReplacementRule;

/// Rewrites every literal occurrence of each rule's pattern, applying rules
/// in order. A later rule sees the output of earlier ones, so rule order can
/// change the result. Must run before `Content-Length` is recomputed.
pub fn censor_body(body: &[u8], rules: &[ReplacementRule]) -> Vec<u8> {
    let mut censored = body.to_vec();
    for rule in rules {
        if rule.pattern.is_empty() {
            continue;
        }
        censored = replace_all(
            &censored,
            rule.pattern.as_bytes(),
            rule.replacement.as_bytes(),
        );
    }
    censored
}

fn replace_all(haystack: &[u8], pattern: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(index) = twoway::find_bytes(rest, pattern) {
        out.extend_from_slice(&rest[..index]);
        out.extend_from_slice(replacement);
        rest = &rest[index + pattern.len()..];
    }
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::censor_body;
    use crate::config::ReplacementRule;

    fn rule(pattern: &str, replacement: &str) -> ReplacementRule {
        ReplacementRule {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn replaces_single_occurrence() {
        let censored = censor_body(b"the quick fox", &[rule("quick", "slow")]);
        assert_eq!(censored, b"the slow fox");
    }

    #[test]
    fn replaces_every_occurrence() {
        let censored = censor_body(b"bad, bad, bad", &[rule("bad", "ok")]);
        assert_eq!(censored, b"ok, ok, ok");
    }

    #[test]
    fn matches_do_not_overlap() {
        let censored = censor_body(b"aaaa", &[rule("aa", "b")]);
        assert_eq!(censored, b"bb");
    }

    #[test]
    fn untouched_bytes_stay_identical() {
        let body = b"prefix secret suffix";
        let censored = censor_body(body, &[rule("secret", "******")]);
        assert_eq!(censored, b"prefix ****** suffix");
    }

    #[test]
    fn no_match_returns_input() {
        let body = b"nothing to hide";
        assert_eq!(censor_body(body, &[rule("secret", "x")]), body);
    }

    #[test]
    fn no_rules_returns_input() {
        assert_eq!(censor_body(b"as is", &[]), b"as is");
    }

    #[test]
    fn body_can_grow_or_shrink() {
        assert_eq!(censor_body(b"hi", &[rule("hi", "goodbye")]), b"goodbye");
        assert_eq!(censor_body(b"goodbye", &[rule("goodbye", "hi")]), b"hi");
    }

    #[test]
    fn rules_apply_in_order() {
        let rules = [rule("cat", "dog"), rule("dog", "bird")];
        // The first rule's output is eligible for the second.
        assert_eq!(censor_body(b"cat", &rules), b"bird");

        let reversed = [rule("dog", "bird"), rule("cat", "dog")];
        assert_eq!(censor_body(b"cat", &reversed), b"dog");
    }

    #[test]
    fn empty_pattern_is_skipped() {
        assert_eq!(censor_body(b"abc", &[rule("", "x")]), b"abc");
    }
}
