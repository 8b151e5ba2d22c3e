use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::tools::{search::Article, Tool, ToolError};

const NO_RESULT_MESSAGE: &str = "No good search result was found";

/// Web search over the DuckDuckGo HTML endpoint.
///
/// An optional `site:` filter scopes every query to one domain, which is how
/// a domain-specific variant (e.g. a medical search over webmd.com) is built
/// from the same tool.
pub struct DuckDuckGoSearch {
    name: String,
    description: String,
    url: String,
    client: Client,
    max_results: usize,
    site_filter: Option<String>,
}

impl DuckDuckGoSearch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Restricts every query to a single domain via DuckDuckGo's `site:`
    /// operator.
    pub fn with_site_filter(mut self, site: impl Into<String>) -> Self {
        self.site_filter = Some(site.into());
        self
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Article>, ToolError> {
        let query = match &self.site_filter {
            Some(site) => format!("site:{site} {query}"),
            None => query.to_string(),
        };

        let mut url = Url::parse(&self.url).map_err(ToolError::execution_error)?;
        let query_params = HashMap::from([("q", query.as_str())]);
        url.query_pairs_mut().extend_pairs(query_params.iter());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ToolError::execution_error)?;
        let body = response.text().await.map_err(ToolError::execution_error)?;
        let document = Html::parse_document(&body);

        let result_selector = Selector::parse(".web-result").expect("Static selector is valid");
        let result_title_selector =
            Selector::parse(".result__a").expect("Static selector is valid");
        let result_url_selector =
            Selector::parse(".result__url").expect("Static selector is valid");
        let result_snippet_selector =
            Selector::parse(".result__snippet").expect("Static selector is valid");

        let results = document
            .select(&result_selector)
            .filter_map(|result| {
                let title = result
                    .select(&result_title_selector)
                    .next()?
                    .text()
                    .collect::<Vec<_>>()
                    .join("");
                let link = result
                    .select(&result_url_selector)
                    .next()?
                    .text()
                    .collect::<Vec<_>>()
                    .join("")
                    .trim()
                    .to_string();
                let snippet = result
                    .select(&result_snippet_selector)
                    .next()?
                    .text()
                    .collect::<Vec<_>>()
                    .join("");

                Some(Article::new(title, link, snippet))
            })
            .take(self.max_results)
            .collect::<Vec<_>>();

        Ok(results)
    }
}

#[async_trait]
impl Tool for DuckDuckGoSearch {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    async fn call(&self, input: &str) -> Result<String, ToolError> {
        let results = self.search(input).await?;

        if results.is_empty() {
            return Ok(NO_RESULT_MESSAGE.to_string());
        }

        Ok(results
            .iter()
            .map(|article| article.to_string())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

impl Default for DuckDuckGoSearch {
    fn default() -> Self {
        Self {
            name: "Search".to_string(),
            description: "useful for when you need to answer questions about current events"
                .to_string(),
            url: "https://duckduckgo.com/html/".to_string(),
            client: Client::new(),
            max_results: 4,
            site_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_PAGE: &str = r#"
        <html><body>
            <div class="web-result">
                <a class="result__a">Flu Symptoms</a>
                <span class="result__url"> webmd.com/flu </span>
                <span class="result__snippet">Common flu symptoms include fever and chills.</span>
            </div>
            <div class="web-result">
                <a class="result__a">Cold or Flu?</a>
                <span class="result__url"> webmd.com/cold-or-flu </span>
                <span class="result__snippet">How to tell a cold from the flu.</span>
            </div>
        </body></html>"#;

    #[tokio::test]
    async fn test_search_extracts_articles() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::UrlEncoded(
                "q".into(),
                "flu symptoms".into(),
            ))
            .with_body(RESULT_PAGE)
            .create_async()
            .await;

        let tool = DuckDuckGoSearch::default().with_base_url(server.url());
        let observation = tool.call("flu symptoms").await.unwrap();

        mock.assert_async().await;
        assert!(observation.contains("[Flu Symptoms](webmd.com/flu)"));
        assert!(observation.contains("Common flu symptoms include fever and chills."));
        assert!(observation.contains("[Cold or Flu?](webmd.com/cold-or-flu)"));
    }

    #[tokio::test]
    async fn test_site_filter_is_prepended() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::UrlEncoded(
                "q".into(),
                "site:webmd.com thyroid".into(),
            ))
            .with_body(RESULT_PAGE)
            .create_async()
            .await;

        let tool = DuckDuckGoSearch::default()
            .with_name("Search WebMD")
            .with_site_filter("webmd.com")
            .with_base_url(server.url());
        tool.call("thyroid").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_body("<html><body></body></html>")
            .create_async()
            .await;

        let tool = DuckDuckGoSearch::default().with_base_url(server.url());
        let observation = tool.call("gibberish").await.unwrap();

        assert_eq!(observation, NO_RESULT_MESSAGE);
    }

    #[tokio::test]
    async fn test_max_results_caps_output() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_body(RESULT_PAGE)
            .create_async()
            .await;

        let tool = DuckDuckGoSearch::default()
            .with_max_results(1)
            .with_base_url(server.url());
        let results = tool.search("flu").await.unwrap();

        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_search() {
        let tool = DuckDuckGoSearch::default().with_max_results(5);
        let observation = tool.call("Who is the current President of Peru?").await.unwrap();

        println!("{observation}");
    }
}
