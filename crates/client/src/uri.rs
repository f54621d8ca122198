//! Pure helpers for composing request URLs.
//!
//! Neither function touches its input; both hand back a new [`Url`].

use url::form_urlencoded::byte_serialize;
use url::Url;

/// Append `segment` to the path of `base`, leaving exactly one `/`
/// between the existing path and the segment.
///
/// Leading and trailing slashes on `segment` and a trailing slash on the
/// existing path are trimmed. An empty segment returns `base` as-is.
pub fn append_path(base: &Url, segment: &str) -> Url {
    if segment.is_empty() {
        return base.clone();
    }

    let segment = segment.trim_matches('/');
    let current = base.path().trim_end_matches('/');

    let mut url = base.clone();
    url.set_path(&format!("{}/{}", current, segment));
    url
}

/// Append `key=value` pairs to the query of `base`.
///
/// Pairs with an empty key or value are skipped. Keys and values are
/// form-urlencoded. When no pair survives, `base` is returned as-is.
pub fn append_query<K, V>(base: &Url, pairs: &[(K, V)]) -> Url
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let encoded = pairs
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>();

    if encoded.is_empty() {
        return base.clone();
    }

    let mut query = base.query().unwrap_or_default().to_string();
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(&encoded.join("&"));

    let mut url = base.clone();
    url.set_query(Some(&query));
    url
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://127.0.0.1:5001").unwrap()
    }

    #[test]
    fn test_append_paths() {
        let first = append_path(&base(), "/api/v0/");
        assert_eq!(first.as_str(), "http://127.0.0.1:5001/api/v0");

        let second = append_path(&first, "/methodName");
        assert_eq!(second.as_str(), "http://127.0.0.1:5001/api/v0/methodName");
    }

    #[test]
    fn test_append_path_empty_segment_is_identity() {
        let url = Url::parse("http://127.0.0.1:5001/api/v0/").unwrap();
        assert_eq!(append_path(&url, ""), url);
    }

    #[test]
    fn test_append_path_is_associative() {
        let bases = [
            "http://127.0.0.1:5001",
            "http://127.0.0.1:5001/",
            "http://localhost:5001/api/v0",
            "http://localhost:5001/api/v0/",
        ];

        for raw in bases {
            let base = Url::parse(raw).unwrap();
            let stepwise = append_path(&append_path(&base, "a"), "b");
            let joined = append_path(&base, "a/b");
            assert_eq!(stepwise, joined, "base {}", raw);
        }
    }

    #[test]
    fn test_append_path_is_idempotent_on_normalized_input() {
        let url = append_path(&base(), "api/v0");
        let again = append_path(&Url::parse(url.as_str()).unwrap(), "");
        assert_eq!(url, again);
    }

    #[test]
    fn test_append_query() {
        let url = Url::parse("http://127.0.0.1:5001/api/v0/methodName").unwrap();
        let url = append_query(&url, &[("arg", "myArg")]);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5001/api/v0/methodName?arg=myArg"
        );

        let url = append_query(&url, &[("timeout", "1"), ("vis", "d3")]);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5001/api/v0/methodName?arg=myArg&timeout=1&vis=d3"
        );
    }

    #[test]
    fn test_append_query_empty_is_identity() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(append_query(&base(), &empty), base());
    }

    #[test]
    fn test_append_query_skips_empty_pairs() {
        assert_eq!(append_query(&base(), &[("k", "")]), base());
        assert_eq!(append_query(&base(), &[("", "v")]), base());

        let url = append_query(&base(), &[("", "v"), ("k", "v"), ("k2", "")]);
        assert_eq!(url.query(), Some("k=v"));
    }

    #[test]
    fn test_append_query_encodes_values() {
        let url = append_query(&base(), &[("arg", "/ipfs/Qm abc")]);
        assert_eq!(url.query(), Some("arg=%2Fipfs%2FQm+abc"));
    }
}
