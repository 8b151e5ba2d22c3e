use crate::schemas::{AgentAction, AgentDecision};

use super::OutputParseError;

/// The literal that ends a turn. Everything after its last occurrence is the
/// final answer.
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// What a single line of the completion contributes to the ReAct mini-language.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// `Action:` (optionally `Action 1:`), carrying the text after the colon.
    Action(&'a str),
    /// `Action Input:` (optionally `Action 1 Input 1:`), carrying the text
    /// after the colon.
    ActionInput(&'a str),
    /// Anything else (`Thought:` lines, prose, continuations).
    Other,
}

/// Skips the optional padding between marker keywords: whitespace, an
/// optional numeral, more whitespace.
fn eat_padding(s: &str) -> &str {
    s.trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start()
}

fn classify(line: &str) -> LineKind<'_> {
    let Some(rest) = line.strip_prefix("Action") else {
        return LineKind::Other;
    };

    let rest = eat_padding(rest);
    if let Some(body) = rest.strip_prefix(':') {
        return LineKind::Action(body);
    }
    if let Some(rest) = rest.strip_prefix("Input") {
        if let Some(body) = eat_padding(rest).strip_prefix(':') {
            return LineKind::ActionInput(body);
        }
    }

    LineKind::Other
}

/// Trims the tool input: surrounding spaces first, then one layer of double
/// quotes, and only when a quote is present on both ends.
fn normalize_tool_input(raw: &str) -> String {
    let trimmed = raw.trim_start().trim_end_matches(' ');

    match trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.to_string(),
        None => trimmed.to_string(),
    }
}

/// Classifies one raw model completion as either a tool invocation or a
/// final answer.
///
/// The completion is expected to follow the ReAct line protocol
/// (`Thought:` / `Action:` / `Action Input:` / `Observation:` /
/// `Final Answer:`). Parsing is total: every input either produces an
/// [`AgentDecision`] or an [`OutputParseError`] carrying the offending text —
/// nothing is silently degraded, and no retry happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReActOutputParser;

impl ReActOutputParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str) -> Result<AgentDecision, OutputParseError> {
        // The last occurrence wins: earlier ones may sit inside quoted or
        // example text within the completion.
        if let Some(idx) = text.rfind(FINAL_ANSWER_MARKER) {
            let output = text[idx + FINAL_ANSWER_MARKER.len()..].trim();
            return Ok(AgentDecision::Finish(output.to_string()));
        }

        match self.parse_action(text) {
            Some(action) => Ok(AgentDecision::Invoke(action)),
            None => Err(OutputParseError::Unparseable(text.to_string())),
        }
    }

    /// Scans for the first `Action:` line, then for the first `Action Input:`
    /// line after it. The tool name is everything in between (it may span
    /// lines); the tool input is everything from that marker to the end of
    /// the completion.
    fn parse_action(&self, text: &str) -> Option<AgentAction> {
        let lines: Vec<&str> = text.lines().collect();

        let (action_idx, first_name_part) =
            lines.iter().enumerate().find_map(|(i, &line)| match classify(line) {
                LineKind::Action(body) => Some((i, body)),
                _ => None,
            })?;

        let mut name_parts = vec![first_name_part];
        let mut input_marker = None;
        for (i, &line) in lines.iter().enumerate().skip(action_idx + 1) {
            if let LineKind::ActionInput(body) = classify(line) {
                input_marker = Some((i, body));
                break;
            }
            name_parts.push(line);
        }
        let (input_idx, first_input_part) = input_marker?;

        let mut input_parts = vec![first_input_part];
        input_parts.extend_from_slice(&lines[input_idx + 1..]);

        Some(AgentAction {
            tool: name_parts.join("\n").trim().to_string(),
            tool_input: normalize_tool_input(&input_parts.join("\n")),
            log: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_final_answer() {
        let text = "Thought: I now know the final answer\nFinal Answer: Take rest and drink fluids.";
        let decision = ReActOutputParser::new().parse(text).unwrap();

        assert_eq!(
            decision,
            AgentDecision::Finish("Take rest and drink fluids.".into())
        );
    }

    #[test]
    fn test_final_answer_last_occurrence_wins() {
        let text = "Final Answer: Final Answer: Take rest";
        let decision = ReActOutputParser::new().parse(text).unwrap();

        assert_eq!(decision, AgentDecision::Finish("Take rest".into()));
    }

    #[test]
    fn test_final_answer_takes_precedence_over_action() {
        let text = indoc! {"
            Action: Search
            Action Input: flu
            Final Answer: It is the flu."};
        let decision = ReActOutputParser::new().parse(text).unwrap();

        assert_eq!(decision, AgentDecision::Finish("It is the flu.".into()));
    }

    #[test]
    fn test_action_parse() {
        let text = "Thought: I should search.\nAction: Search\nAction Input: flu symptoms";
        let decision = ReActOutputParser::new().parse(text).unwrap();

        assert_eq!(
            decision,
            AgentDecision::Invoke(AgentAction {
                tool: "Search".into(),
                tool_input: "flu symptoms".into(),
                log: text.into(),
            })
        );
    }

    #[test]
    fn test_action_parse_with_numerals() {
        let text = "Action 1: Search\nAction 1 Input 1: thyroid treatment";
        let decision = ReActOutputParser::new().parse(text).unwrap();

        assert_eq!(
            decision,
            AgentDecision::Invoke(AgentAction {
                tool: "Search".into(),
                tool_input: "thyroid treatment".into(),
                log: text.into(),
            })
        );
    }

    #[test]
    fn test_multiline_tool_input() {
        let text = indoc! {"
            Action: Search
            Action Input: first line
            second line"};
        let AgentDecision::Invoke(action) = ReActOutputParser::new().parse(text).unwrap() else {
            panic!("expected an action");
        };

        assert_eq!(action.tool_input, "first line\nsecond line");
    }

    #[test]
    fn test_quote_stripping() {
        let parser = ReActOutputParser::new();

        let AgentDecision::Invoke(action) = parser
            .parse("Action: Search\nAction Input: \"fever\"")
            .unwrap()
        else {
            panic!("expected an action");
        };
        assert_eq!(action.tool_input, "fever");

        let AgentDecision::Invoke(action) =
            parser.parse("Action: Search\nAction Input: fever").unwrap()
        else {
            panic!("expected an action");
        };
        assert_eq!(action.tool_input, "fever");
    }

    #[test]
    fn test_unbalanced_quote_is_kept() {
        let AgentDecision::Invoke(action) = ReActOutputParser::new()
            .parse("Action: Search\nAction Input: \"fever")
            .unwrap()
        else {
            panic!("expected an action");
        };

        assert_eq!(action.tool_input, "\"fever");
    }

    #[test]
    fn test_parse_failure_carries_raw_text() {
        let text = "I am thinking about it.";
        let err = ReActOutputParser::new().parse(text).unwrap_err();

        assert_eq!(err.raw_output(), text);
        assert_eq!(
            err.to_string(),
            "Could not parse LLM output: `I am thinking about it.`"
        );
    }

    #[test]
    fn test_action_without_input_fails() {
        let err = ReActOutputParser::new()
            .parse("Thought: hmm\nAction: Search")
            .unwrap_err();

        assert_eq!(err.raw_output(), "Thought: hmm\nAction: Search");
    }

    #[test]
    fn test_input_before_action_fails() {
        assert!(ReActOutputParser::new()
            .parse("Action Input: flu\nAction: Search")
            .is_err());
    }

    #[test]
    fn test_marker_must_begin_a_line() {
        assert!(ReActOutputParser::new()
            .parse("We could take an Action: Search\nbut nothing more.")
            .is_err());
    }

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify("Action: Search"), LineKind::Action(" Search"));
        assert_eq!(classify("Action 2: Search"), LineKind::Action(" Search"));
        assert_eq!(
            classify("Action Input: flu"),
            LineKind::ActionInput(" flu")
        );
        assert_eq!(
            classify("Action 2 Input 2: flu"),
            LineKind::ActionInput(" flu")
        );
        assert_eq!(classify("Thought: hmm"), LineKind::Other);
        assert_eq!(classify("Observation: result"), LineKind::Other);
        assert_eq!(classify("Actionable: no"), LineKind::Other);
    }
}
