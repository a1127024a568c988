//! Command builders for the CLI.
//!
//! Every subcommand takes one input document. Commands that parse also take
//! the parser flags; output flags are added per command.

use clap::Command;

use super::args::*;

/// Input and diagnostics flags shared by all commands.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(input_arg()).arg(color_arg()).arg(verbose_arg())
}

/// Parser configuration for commands that build a tree.
fn with_parser_args(cmd: Command) -> Command {
    with_common_args(cmd.arg(strict_arg()).arg(max_depth_arg()))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("curly")
        .about("Tokenize, inspect and format a minimal JSON dialect")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(fmt_command())
        .subcommand(check_command())
}

/// Print the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the token stream of a document")
        .after_help(
            r#"EXAMPLES:
  curly tokens config.json            # one token per line
  curly tokens config.json --spans    # with byte ranges
  echo '{"a": 1}' | curly tokens -    # from stdin"#,
        )
        .arg(spans_arg())
        .arg(json_arg());

    with_common_args(cmd)
}

/// Print the parsed tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Print the parsed tree of a document")
        .after_help(
            r#"EXAMPLES:
  curly ast config.json               # indented outline
  curly ast config.json --json        # serialized tree"#,
        )
        .arg(json_arg());

    with_parser_args(cmd)
}

/// Print or write the canonical rendering.
pub fn fmt_command() -> Command {
    let cmd = Command::new("fmt")
        .about("Render a document in canonical form")
        .after_help(
            r#"EXAMPLES:
  curly fmt config.json               # print to stdout
  curly fmt config.json -o out.json   # write to file"#,
        )
        .arg(output_file_arg());

    with_parser_args(cmd)
}

/// Validate a document.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a document")
        .after_help(
            r#"EXAMPLES:
  curly check config.json             # silent on success
  curly check config.json --strict    # also reject stray separators"#,
        );

    with_parser_args(cmd)
}
