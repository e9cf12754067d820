//! Logos-based keyword recognition for Dockerfile instructions.

use logos::Logos;

use super::Instruction;

/// Logos token enum - maps to [`Instruction`]
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeywordToken {
    #[token("FROM", ignore(ascii_case))]
    From,
    #[token("RUN", ignore(ascii_case))]
    Run,
    #[token("CMD", ignore(ascii_case))]
    Cmd,
    #[token("LABEL", ignore(ascii_case))]
    Label,
    #[token("MAINTAINER", ignore(ascii_case))]
    Maintainer,
    #[token("EXPOSE", ignore(ascii_case))]
    Expose,
    #[token("ENV", ignore(ascii_case))]
    Env,
    #[token("ADD", ignore(ascii_case))]
    Add,
    #[token("COPY", ignore(ascii_case))]
    Copy,
    #[token("ENTRYPOINT", ignore(ascii_case))]
    Entrypoint,
    #[token("VOLUME", ignore(ascii_case))]
    Volume,
    #[token("USER", ignore(ascii_case))]
    User,
    #[token("WORKDIR", ignore(ascii_case))]
    Workdir,
    #[token("ARG", ignore(ascii_case))]
    Arg,
    #[token("ONBUILD", ignore(ascii_case))]
    Onbuild,
    #[token("STOPSIGNAL", ignore(ascii_case))]
    Stopsignal,
    #[token("HEALTHCHECK", ignore(ascii_case))]
    Healthcheck,
    #[token("SHELL", ignore(ascii_case))]
    Shell,
}

impl From<KeywordToken> for Instruction {
    fn from(token: KeywordToken) -> Self {
        match token {
            KeywordToken::From => Instruction::From,
            KeywordToken::Run => Instruction::Run,
            KeywordToken::Cmd => Instruction::Cmd,
            KeywordToken::Label => Instruction::Label,
            KeywordToken::Maintainer => Instruction::Maintainer,
            KeywordToken::Expose => Instruction::Expose,
            KeywordToken::Env => Instruction::Env,
            KeywordToken::Add => Instruction::Add,
            KeywordToken::Copy => Instruction::Copy,
            KeywordToken::Entrypoint => Instruction::Entrypoint,
            KeywordToken::Volume => Instruction::Volume,
            KeywordToken::User => Instruction::User,
            KeywordToken::Workdir => Instruction::Workdir,
            KeywordToken::Arg => Instruction::Arg,
            KeywordToken::Onbuild => Instruction::Onbuild,
            KeywordToken::Stopsignal => Instruction::Stopsignal,
            KeywordToken::Healthcheck => Instruction::Healthcheck,
            KeywordToken::Shell => Instruction::Shell,
        }
    }
}

/// Classify a keyword word. The whole word must be one token: `FROMX` is unknown.
pub(super) fn classify_keyword(word: &str) -> Instruction {
    let mut lexer = KeywordToken::lexer(word);
    match lexer.next() {
        Some(Ok(token)) if lexer.span().end == word.len() => token.into(),
        _ => Instruction::Unknown,
    }
}
