use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use proc_macro2::{Delimiter, Group, Ident, Punct, Spacing, Span, TokenStream, TokenTree};

const MODULE: &str = "contest_template";

// std-only modules that can be pasted into a judge submission
const BUNDLED: &[&str] = &["consts", "num", "modint", "rng", "ordered_set", "render", "debug", "fastio", "macros"];

fn is_punct(tt: Option<&TokenTree>, ch: char) -> bool {
    matches!(tt, Some(TokenTree::Punct(p)) if p.as_char() == ch)
}

fn is_ident(tt: Option<&TokenTree>, name: &str) -> bool {
    matches!(tt, Some(TokenTree::Ident(i)) if i == name)
}

fn attr_starts_with(group: &Group, name: &str) -> bool {
    group.delimiter() == Delimiter::Bracket && is_ident(group.stream().into_iter().next().as_ref(), name)
}

fn is_cfg_test(group: &Group) -> bool {
    attr_starts_with(group, "cfg") && group.stream().to_string().replace(' ', "") == "cfg(test)"
}

/// Drops docs and test modules, anchors `crate::` paths under [`MODULE`] and
/// pins the build mode to online-judge.
fn rewrite(stream: TokenStream) -> TokenStream {
    let tokens: Vec<TokenTree> = stream.into_iter().collect();
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let tt = &tokens[i];

        // `#[doc = ".."]`, `#![doc = ".."]` and `#[cfg(test)] <item>`
        if is_punct(Some(tt), '#') {
            let bang = is_punct(tokens.get(i + 1), '!');
            let attr_at = if bang { i + 2 } else { i + 1 };
            if let Some(TokenTree::Group(attr)) = tokens.get(attr_at) {
                if attr_starts_with(attr, "doc") {
                    i = attr_at + 1;
                    continue
                }
                if !bang && is_cfg_test(attr) {
                    i = attr_at + 1;
                    while i < tokens.len() {
                        let end = matches!(&tokens[i], TokenTree::Group(g) if g.delimiter() == Delimiter::Brace)
                            || is_punct(tokens.get(i), ';');
                        i += 1;
                        if end {
                            break
                        }
                    }
                    continue
                }
            }
        }

        // `cfg!(feature = "online-judge")` becomes `true`
        if is_ident(Some(tt), "cfg") && is_punct(tokens.get(i + 1), '!') {
            if let Some(TokenTree::Group(args)) = tokens.get(i + 2) {
                if args.stream().to_string().contains("online-judge") {
                    out.push(TokenTree::Ident(Ident::new("true", Span::call_site())));
                    i += 3;
                    continue
                }
            }
        }

        match tt {
            TokenTree::Ident(ident)
                if ident == "crate" && is_punct(tokens.get(i + 1), ':') && is_punct(tokens.get(i + 2), ':') =>
            {
                out.push(tt.clone());
                out.push(tokens[i + 1].clone());
                out.push(tokens[i + 2].clone());
                out.push(TokenTree::Ident(Ident::new(MODULE, Span::call_site())));
                out.push(TokenTree::Punct(Punct::new(':', Spacing::Joint)));
                out.push(TokenTree::Punct(Punct::new(':', Spacing::Alone)));
                i += 3;
                continue
            }
            TokenTree::Group(group) => {
                let mut inner = Group::new(group.delimiter(), rewrite(group.stream()));
                inner.set_span(group.span());
                out.push(TokenTree::Group(inner));
            }
            _ => out.push(tt.clone()),
        }
        i += 1;
    }

    out.into_iter().collect()
}

fn main() {
    let mut bundle = String::new();
    for name in BUNDLED {
        let path = format!("src/{name}.rs");
        println!("cargo:rerun-if-changed={path}");

        let src = fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"));
        let tokens = src.parse::<TokenStream>().unwrap_or_else(|e| panic!("cannot parse {path}: {e:?}"));
        bundle.push_str(&format!("#[macro_use] pub mod {name} {{ {} }} ", rewrite(tokens)));
    }

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let source = format!("#[macro_use] #[allow(dead_code, unused_imports, unused_macros)] pub mod {MODULE} {{ {bundle}}}");
    write!(
        File::create(Path::new(&out_dir).join("bundle.rs")).expect("cannot create bundle.rs"),
        "pub const MODULE_NAME: &str = {MODULE:?};\npub const SOURCE: &str = {source:?};"
    )
    .expect("cannot write bundle.rs")
}
