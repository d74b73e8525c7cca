// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completions for `cw`.
//!
//! ```bash
//! cw completions bash > ~/.local/share/bash-completion/completions/cw
//! cw completions zsh > ~/.zfunc/_cw
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "cw", &mut io::stdout());
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
