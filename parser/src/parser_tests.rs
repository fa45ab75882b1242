use crate::{
    ast::{Filter, FilterKey, Term},
    parser::{
        is_tab, is_whitespace, parse_filter, parse_query, parse_raw_token, parse_term,
        parse_terms, strip_quotes, tokenize,
    },
};

// Helper Functions
#[test]
fn test_is_tab() {
    assert!(is_tab('\t'))
}

#[test]
fn test_is_not_tab() {
    assert!(is_tab(' ') == false)
}

#[test]
fn test_whitespace_is_space_or_tab_only() {
    assert!(is_whitespace(' '));
    assert!(is_whitespace('\t'));
    assert!(is_whitespace('\n') == false);
    assert!(is_whitespace('\u{a0}') == false);
    assert!(is_whitespace('Ġ') == false);
}

#[test]
fn test_strip_quotes() {
    assert_eq!(strip_quotes("\"quoted\""), "quoted");
    assert_eq!(strip_quotes("\"half"), "\"half");
    assert_eq!(strip_quotes("a\"b\"c"), "a\"b\"c");
    assert_eq!(strip_quotes("\""), "\"");
    assert_eq!(strip_quotes("\"\""), "");
}

#[test]
fn test_raw_token_keeps_quoted_whitespace() {
    let (nxt, token) = parse_raw_token("title:\"old post\" rest").unwrap();

    assert_eq!(token, "title:\"old post\"");
    assert_eq!(nxt, " rest");
}

#[test]
fn test_raw_token_rejects_leading_whitespace() {
    assert!(parse_raw_token(" hello").is_err());
    assert!(parse_raw_token("").is_err());
}

// Tokenizer
#[test]
fn test_tokenize_quoted_span() {
    assert_eq!(tokenize("a \"b c\" d"), vec!["a", "b c", "d"]);
}

#[test]
fn test_tokenize_enclosing_quotes_stripped() {
    assert_eq!(tokenize("\"quoted\""), vec!["quoted"]);
}

#[test]
fn test_tokenize_embedded_quotes_kept() {
    assert_eq!(tokenize("a\"b\"c"), vec!["a\"b\"c"]);
}

#[test]
fn test_tokenize_whitespace_runs() {
    assert_eq!(tokenize("  hello \t\t world   "), vec!["hello", "world"]);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t  ").is_empty());
}

#[test]
fn test_tokenize_newline_is_not_a_boundary() {
    assert_eq!(tokenize("a\nb c"), vec!["a\nb", "c"]);
}

#[test]
fn test_tokenize_unterminated_quote_runs_to_end() {
    assert_eq!(tokenize("a \"b c d"), vec!["a", "\"b c d"]);
}

#[test]
fn test_tokenize_quote_inside_field_value() {
    assert_eq!(
        tokenize("-title:\"Old Post\" category:news"),
        vec!["-title:\"Old Post\"", "category:news"]
    );
}

#[test]
fn test_tokenize_quoted_token_with_inner_quotes() {
    // only the outer pair is removed
    assert_eq!(tokenize("\"a \"b\" c\""), vec!["a \"b\" c"]);
}

#[test]
fn test_tokenize_non_ascii() {
    assert_eq!(tokenize("café \"crème brûlée\""), vec!["café", "crème brûlée"]);
}

// Filter Parser
#[test]
fn test_parse_category_filter() {
    assert_eq!(
        parse_filter("category:tech"),
        Some(Filter {
            exclude: false,
            key: FilterKey::Category,
            value: "tech".to_string(),
        })
    );
}

#[test]
fn test_parse_excluded_title_filter() {
    assert_eq!(
        parse_filter("-title:\"Old Post\""),
        Some(Filter {
            exclude: true,
            key: FilterKey::Title,
            value: "old post".to_string(),
        })
    );
}

#[test]
fn test_parse_filter_removes_every_quote() {
    let filter = parse_filter("title:a\"b\"\"c").unwrap();

    assert_eq!(filter.value, "abc");
}

#[test]
fn test_parse_filter_value_keeps_later_colons() {
    let filter = parse_filter("title:rust:async").unwrap();

    assert_eq!(filter.key, FilterKey::Title);
    assert_eq!(filter.value, "rust:async");
}

#[test]
fn test_parse_filter_lowercases_value() {
    assert_eq!(parse_filter("category:NeWs").unwrap().value, "news");
}

#[test]
fn test_not_a_filter() {
    assert_eq!(parse_filter("bogus"), None);
    assert_eq!(parse_filter(""), None);
    assert_eq!(parse_filter("-"), None);
    assert_eq!(parse_filter("-bogus"), None);
}

#[test]
fn test_empty_field() {
    assert_eq!(parse_filter(":value"), None);
    assert_eq!(parse_filter("-:value"), None);
}

#[test]
fn test_empty_value() {
    assert_eq!(parse_filter("title:"), None);
    assert_eq!(parse_filter("-category:"), None);
}

#[test]
fn test_unknown_field() {
    assert_eq!(parse_filter("author:me"), None);
    assert_eq!(parse_filter("Title:x"), None);
    assert_eq!(parse_filter("--title:x"), None);
}

#[test]
fn test_quotes_only_value_is_still_a_filter() {
    // the value is non-empty before quotes are removed
    assert_eq!(
        parse_filter("title:\"\""),
        Some(Filter::new(false, FilterKey::Title, ""))
    );
}

// Query Parser
#[test]
fn test_parse_term_falls_back_to_plain() {
    assert_eq!(parse_term("Rust"), Term::Plain("Rust".to_string()));
    assert!(parse_term("title:").is_plain());
    assert!(parse_term("title:x").is_plain() == false);
}

#[test]
fn test_plain_term_into_filter() {
    assert_eq!(
        Term::Plain("-Author:Me".to_string()).into_filter(),
        Filter {
            exclude: false,
            key: FilterKey::Title,
            value: "-author:me".to_string(),
        }
    );
}

#[test]
fn test_parse_terms_keeps_order() {
    let terms = parse_terms("hello category:news -title:draft");

    assert_eq!(
        terms,
        vec![
            Term::Plain("hello".to_string()),
            Term::Filter(Filter::new(false, FilterKey::Category, "news")),
            Term::Filter(Filter::new(true, FilterKey::Title, "draft")),
        ]
    );
}

#[test]
fn test_parse_query() {
    let filters = parse_query("Rust \"Async IO\" -category:drafts");

    assert_eq!(
        filters,
        vec![
            Filter::new(false, FilterKey::Title, "rust"),
            Filter::new(false, FilterKey::Title, "async io"),
            Filter::new(true, FilterKey::Category, "drafts"),
        ]
    );
}

#[test]
fn test_parse_query_quoted_whole_filter() {
    // quotes around the whole token are stripped first, the rest is a filter
    assert_eq!(
        parse_query("\"title:old post\""),
        vec![Filter::new(false, FilterKey::Title, "old post")]
    );
}

#[test]
fn test_parse_query_invalid_filter_keeps_whole_token() {
    assert_eq!(
        parse_query("author:Me"),
        vec![Filter::new(false, FilterKey::Title, "author:me")]
    );
}

#[test]
fn test_parse_empty_query() {
    assert!(parse_query("   ").is_empty());
}

// Display
#[test]
fn test_display_filter() {
    assert_eq!(
        format!("{}", Filter::new(true, FilterKey::Category, "news")),
        "-category:news"
    );
    assert_eq!(format!("{}", FilterKey::Title), "title");
    assert_eq!(format!("{}", Term::Plain("abc".to_string())), "abc");
}

#[test]
fn test_quote_edge_cases() {
    // the quote state is per token and starts closed each time
    assert_eq!(tokenize("\"\" \" x"), vec!["", "\" x"]);
    assert_eq!(tokenize("\""), vec!["\""]);

    let (nxt, token) = parse_raw_token("\"a b\" c").unwrap();
    assert_eq!(token, "\"a b\"");
    assert_eq!(nxt, " c");

    assert_eq!(
        parse_filter("-title:\"\""),
        Some(Filter::new(true, FilterKey::Title, ""))
    );
    assert_eq!(parse_filter("category:a:b").unwrap().value, "a:b");
}
