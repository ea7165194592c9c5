use colored::*;
use xmlcodec_core::Action;

use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn list() {
    for (idx, action) in Action::ALL.into_iter().enumerate() {
        print::tree_head(idx, action.label());
        print::as_tree_one_level(details(action));
    }
    print::fat_separator();
}

fn details(action: Action) -> Vec<Detail> {
    let command: String = format!("xmlcodec {}", format!("{action:?}").to_lowercase());
    vec![
        ("Name".to_string(), action.name().color(colors::ACCENT)),
        ("About".to_string(), action.description().normal()),
        ("Usage".to_string(), command.color(colors::TEXT_DEFAULT)),
    ]
}
