use teloxide::prelude::*;
use uuid::Uuid;

use crate::bot::reply::{InlineResult, ReplySink};
use crate::bot::{guarded, HandlerResult};

pub const EMPTY_QUERY_TEXT: &str = "Empty query";

/// Echo the query back as a single article. Telegram rejects blank article text, so an
/// empty or whitespace-only query gets the placeholder instead.
pub fn echo_results(query: &str) -> Vec<InlineResult> {
    let content = if query.trim().is_empty() {
        EMPTY_QUERY_TEXT
    } else {
        query
    };

    vec![InlineResult {
        id: Uuid::new_v4().to_string(),
        title: "Echo".to_string(),
        content: content.to_string(),
    }]
}

pub async fn handle_inline_query(bot: Bot, q: InlineQuery) -> HandlerResult {
    tracing::debug!("Inline query {} from user {}: {:?}", q.id, q.from.id.0, q.query);
    guarded("inline query", answer(q.id, &q.query, &bot)).await
}

async fn answer<S>(query_id: String, query: &str, sink: &S) -> HandlerResult
where
    S: ReplySink + ?Sized,
{
    sink.answer_inline(query_id, echo_results(query)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::test_support::{RecordingSink, Sent};

    #[test]
    fn test_empty_query_echoes_placeholder() {
        let results = echo_results("");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Echo");
        assert_eq!(results[0].content, "Empty query");
    }

    #[test]
    fn test_blank_query_echoes_placeholder() {
        for query in ["   ", "\t", " \n "] {
            let results = echo_results(query);
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].content, "Empty query", "{:?}", query);
        }
    }

    #[test]
    fn test_query_is_echoed_verbatim() {
        let results = echo_results("foo bar");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Echo");
        assert_eq!(results[0].content, "foo bar");
    }

    #[test]
    fn test_ids_are_fresh_per_call() {
        let a = echo_results("same");
        let b = echo_results("same");
        assert_ne!(a[0].id, b[0].id);
        assert!(Uuid::parse_str(&a[0].id).is_ok());
    }

    #[tokio::test]
    async fn test_answer_goes_to_the_query_id() {
        let sink = RecordingSink::default();
        answer("q-1".to_string(), "  spaced  ", &sink).await.unwrap();

        match sink.sent().as_slice() {
            [Sent::Inline(id, results)] => {
                assert_eq!(id, "q-1");
                assert_eq!(results[0].content, "  spaced  ");
            }
            other => panic!("unexpected sends: {:?}", other),
        }
    }
}
