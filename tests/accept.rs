mod accept {
    use http_rfcx::accept::{self, MediaRange};
    use http_rfcx::{Accept, Error, ParseOptions, Result};
    use http_types::{Method, Request, Url};
    use pretty_assertions::assert_eq;

    #[test]
    fn rfc_examples() -> Result<()> {
        let accept = accept::parse("text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c")?;
        assert_eq!(
            accept.most_acceptable(&["text/plain", "text/x-dvi", "text/html"]),
            Some(&"text/html")
        );
        assert_eq!(
            accept.most_acceptable(&["text/plain", "text/x-dvi"]),
            Some(&"text/x-dvi")
        );

        let accept = accept::parse("audio/*; q=0.2, audio/basic")?;
        assert_eq!(
            accept.most_acceptable(&["audio/mpeg", "audio/basic"]),
            Some(&"audio/basic")
        );
        Ok(())
    }

    #[test]
    fn more_specific_ranges_win() -> Result<()> {
        let accept = accept::parse("*/*, text/*, text/html;level=1, text/html")?;
        let ranges = accept.media_ranges();
        assert!(ranges[2].weight() > ranges[3].weight());
        assert!(ranges[3].weight() > ranges[1].weight());
        assert!(ranges[1].weight() > ranges[0].weight());

        assert_eq!(
            accept.most_acceptable(&["image/png", "text/plain", "text/html;level=1"]),
            Some(&"text/html;level=1")
        );
        assert_eq!(
            accept.most_acceptable(&["image/png", "text/plain"]),
            Some(&"text/plain")
        );
        Ok(())
    }

    #[test]
    fn empty_header_behaves_like_any() -> Result<()> {
        let empty = accept::parse("")?;
        let any = accept::parse("*/*")?;
        for candidate in &["text/html", "application/json", "x/y"] {
            assert_eq!(empty.acceptable(candidate), any.acceptable(candidate));
        }
        let candidates = ["application/json", "text/html"];
        assert_eq!(
            empty.most_acceptable(&candidates),
            any.most_acceptable(&candidates)
        );
        assert_eq!(empty.to_string(), "*/*");
        Ok(())
    }

    #[test]
    fn wildcard_validity() {
        assert_eq!(accept::parse("*/json"), Err(Error::InvalidMediaRange));
        assert!(accept::parse("*/*").is_ok());
        assert!(accept::parse("application/*").is_ok());
    }

    #[test]
    fn quality_must_be_a_number() {
        assert_eq!(
            accept::parse("text/html; q=yes"),
            Err(Error::QMustBeNumberBetween0And1)
        );
        assert_eq!(
            Error::QMustBeNumberBetween0And1.to_string(),
            "invalid media range: q must be a number between 0 and 1"
        );
    }

    #[test]
    fn render_normalizes() -> Result<()> {
        let accept: Accept = "TEXT/HTML;Level=1;q=0.7 ,application/json;q=0".parse()?;
        assert_eq!(
            accept.to_string(),
            "text/html; q=0.7; level=1, application/json"
        );
        Ok(())
    }

    #[test]
    fn tiny_quality_does_not_survive_rendering() -> Result<()> {
        let candidates = ["a/b", "c/d"];
        let accept = accept::parse("a/b;q=0.04, c/d;q=0.5")?;
        assert_eq!(accept.most_acceptable(&candidates), Some(&"c/d"));

        let rendered = accept.to_string();
        assert_eq!(rendered, "a/b; q=0.0, c/d; q=0.5");
        let reparsed = accept::parse(&rendered)?;
        assert_eq!(reparsed.most_acceptable(&candidates), Some(&"a/b"));
        Ok(())
    }

    #[test]
    fn build_by_hand() -> Result<()> {
        let accept = Accept::new(vec![
            MediaRange::new("application", "json")?.with_q(0.9),
            MediaRange::new("text", "csv")?.param("header", "present")?,
        ]);
        assert_eq!(
            accept.to_string(),
            "application/json; q=0.9, text/csv; header=present"
        );
        assert_eq!(accept, accept::parse(&accept.to_string())?);
        assert_eq!(
            accept.most_acceptable(&["text/csv;header=present", "application/json"]),
            Some(&"text/csv;header=present")
        );
        Ok(())
    }

    #[test]
    fn length_limit() {
        let input = vec!["text/html"; 2000].join(", ");
        assert!(matches!(accept::parse(&input), Err(Error::TooLong { .. })));
        let opts = ParseOptions::new().max_length(None);
        assert_eq!(
            accept::parse_with_opts(&input, opts).unwrap().media_ranges().len(),
            2000
        );
    }

    #[test]
    fn from_request_headers() -> Result<()> {
        let mut req = Request::new(Method::Get, Url::parse("https://x/").unwrap());
        req.append_header("Accept", "application/json; q=0.5");
        req.append_header("Accept", "text/html");

        let accept = Accept::from_headers(&req)?;
        assert_eq!(
            accept.most_acceptable(&["application/json", "text/html"]),
            Some(&"text/html")
        );
        Ok(())
    }
}
