use tiny_http::Request;

/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
/// Decoding works on bytes so multi-byte UTF-8 sequences survive; malformed
/// escapes are kept literally.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                        continue;
                    }
                    None => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parses `key=value&key2=value2` into a `Vec` of `(key, value)` pairs.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (url_decode(k), url_decode(v))
        })
        .collect()
}

/// Reads and parses an `application/x-www-form-urlencoded` request body.
/// An unreadable body parses as an empty form.
pub fn read_form(request: &mut Request) -> Vec<(String, String)> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    parse_form(&body)
}

/// Looks up a key in parsed form pairs, returning the value if found.
pub fn form_get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// Looks up a key and parses it as a finite `f64`.
pub fn form_f64(pairs: &[(String, String)], key: &str) -> Option<f64> {
    form_get(pairs, key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes_and_plus() {
        assert_eq!(url_decode("a+b%20c"), "a b c");
        assert_eq!(url_decode("%E2%9C%93"), "✓");
        assert_eq!(url_decode("100%"), "100%");
    }

    #[test]
    fn parses_click_coordinates() {
        let pairs = parse_form("x=300.5&y=120&junk");
        assert_eq!(form_f64(&pairs, "x"), Some(300.5));
        assert_eq!(form_f64(&pairs, "y"), Some(120.0));
        assert_eq!(form_get(&pairs, "junk"), Some(""));
        assert_eq!(form_f64(&pairs, "z"), None);
    }
}
