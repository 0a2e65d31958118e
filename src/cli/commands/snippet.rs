use anyhow::Result;
use async_trait::async_trait;

use crate::cli::args::SnippetArgs;
use crate::cli::commands::Command;
use crate::core::ComponentDescriptor;
use crate::snippet::synthesize_snippet;

pub struct SnippetCommand {
    args: SnippetArgs,
}

impl SnippetCommand {
    pub fn new(args: SnippetArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for SnippetCommand {
    async fn execute(&self) -> Result<()> {
        let descriptor = ComponentDescriptor::new(self.args.name.clone(), self.args.args.clone());

        println!("{}", synthesize_snippet(&descriptor));
        Ok(())
    }
}
