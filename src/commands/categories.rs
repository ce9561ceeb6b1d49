// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::{keywords_for, suggest};
use crate::models::Category;
use crate::utils::{pretty_table, required_arg};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let data = Category::ALL
                .iter()
                .map(|c| vec![c.label().to_string(), keywords_for(*c).join(", ")])
                .collect();
            println!("{}", pretty_table(&["Category", "Keywords"], data));
        }
        Some(("suggest", sub)) => {
            let description = required_arg(sub, "description")?;
            match suggest(description) {
                Some(c) => println!("{}", c),
                None => println!("No suggestion"),
            }
        }
        _ => {}
    }
    Ok(())
}
