use contest_template::bundle::{MODULE_NAME, SOURCE};
use proc_macro2::{TokenStream, TokenTree};

#[test]
fn bundle_tokenizes_into_one_module() {
    let tokens: Vec<TokenTree> = SOURCE.parse::<TokenStream>().unwrap().into_iter().collect();
    let idents: Vec<String> = tokens
        .iter()
        .filter_map(|tt| match tt {
            TokenTree::Ident(i) => Some(i.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(idents, ["pub", "mod", MODULE_NAME]);
    assert!(matches!(tokens.last(), Some(TokenTree::Group(_))));
}

#[test]
fn bundle_is_smaller_than_the_sources() {
    let sources: usize = ["consts", "num", "modint", "rng", "ordered_set", "render", "debug", "fastio", "macros"]
        .iter()
        .map(|name| std::fs::read_to_string(format!("{}/src/{name}.rs", env!("CARGO_MANIFEST_DIR"))).unwrap().len())
        .sum();
    assert!(SOURCE.len() < sources);
}
