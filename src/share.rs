// src/share.rs
//
// Shareable state: the search text rides in the query string (`q`), the
// selected item's name in the fragment (`#item=<name>`). Other query
// parameters on a base URL are left alone.

use url::{Url, form_urlencoded};

use crate::config::consts::{QUERY_PARAM, SHARE_BASE};

const ANCHOR_KEY: &str = "item";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareState {
    pub query: String,
    pub anchor: Option<String>,
}

fn default_base() -> Url {
    Url::parse(SHARE_BASE).expect("static share base parses")
}

impl ShareState {
    pub fn new(query: &str, anchor: Option<&str>) -> Self {
        Self { query: s!(query), anchor: anchor.map(str::to_string) }
    }

    /// Rewrite `base` so its `q` and fragment reflect this state.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let keep: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(k, _)| k != QUERY_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.set_query(None);
        if !keep.is_empty() || !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &keep {
                pairs.append_pair(k, v);
            }
            if !self.query.is_empty() {
                pairs.append_pair(QUERY_PARAM, &self.query);
            }
        }

        match self.anchor.as_deref().filter(|a| !a.is_empty()) {
            Some(name) => {
                let frag = form_urlencoded::Serializer::new(s!())
                    .append_pair(ANCHOR_KEY, name)
                    .finish();
                url.set_fragment(Some(&frag));
            }
            None => url.set_fragment(None),
        }
        url
    }

    /// Link against the app's own base.
    pub fn to_link(&self) -> String {
        self.to_url(&default_base()).into()
    }

    pub fn from_url(url: &Url) -> Self {
        let query = url
            .query_pairs()
            .find(|(k, _)| k == QUERY_PARAM)
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();
        let anchor = url.fragment().and_then(parse_anchor);
        Self { query, anchor }
    }

    /// Absolute URL, or a relative `?q=…#item=…` resolved against the app base.
    pub fn from_link(text: &str) -> Result<Self, url::ParseError> {
        let url = default_base().join(text.trim())?;
        Ok(Self::from_url(&url))
    }
}

/// `item=<name>`, or a bare percent-encoded name.
fn parse_anchor(fragment: &str) -> Option<String> {
    if fragment.is_empty() {
        return None;
    }
    let pairs: Vec<(String, String)> = form_urlencoded::parse(fragment.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if let Some((_, v)) = pairs.iter().find(|(k, _)| k == ANCHOR_KEY) {
        return Some(v.clone()).filter(|v| !v.is_empty());
    }
    pairs
        .into_iter()
        .next()
        .map(|(k, _)| k)
        .filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_query_or_fragment() {
        let link = ShareState::default().to_link();
        assert_eq!(link, "arc-items://catalog/");
    }

    #[test]
    fn query_and_anchor_are_encoded() {
        let st = ShareState::new("metal parts", Some("ARC Alloy & Co #1"));
        let url = st.to_url(&default_base());
        assert_eq!(url.query(), Some("q=metal+parts"));
        assert_eq!(ShareState::from_url(&url), st);
    }

    #[test]
    fn other_params_survive_and_old_q_is_replaced() {
        let base = Url::parse("http://host/page?lang=en&q=old#stale").unwrap();
        let url = ShareState::new("new", None).to_url(&base);
        assert_eq!(url.as_str(), "http://host/page?lang=en&q=new");
    }

    #[test]
    fn bare_fragment_is_a_name() {
        let st = ShareState::from_link("?q=rare#Dog%20Collar").unwrap();
        assert_eq!(st.query, "rare");
        assert_eq!(st.anchor.as_deref(), Some("Dog Collar"));
    }

    #[test]
    fn missing_q_means_empty_query() {
        let st = ShareState::from_link("arc-items://catalog/").unwrap();
        assert_eq!(st, ShareState::default());
    }
}
