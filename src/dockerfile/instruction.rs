//! Dockerfile instruction keywords and their documentation.

use std::fmt;

/// A Dockerfile instruction keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    From,
    Run,
    Cmd,
    Label,
    Maintainer,
    Expose,
    Env,
    Add,
    Copy,
    Entrypoint,
    Volume,
    User,
    Workdir,
    Arg,
    Onbuild,
    Stopsignal,
    Healthcheck,
    Shell,
    /// Anything else; kept so later stages see every line.
    Unknown,
}

/// Documentation for one instruction.
#[derive(Debug, Clone, Copy)]
pub struct InstructionInfo {
    pub instruction: Instruction,
    pub description: &'static str,
    /// Snippet (LSP syntax) inserted by keyword completion.
    pub snippet: &'static str,
}

const fn info(
    instruction: Instruction,
    description: &'static str,
    snippet: &'static str,
) -> InstructionInfo {
    InstructionInfo {
        instruction,
        description,
        snippet,
    }
}

/// Known instructions in completion order.
pub const INSTRUCTIONS: &[InstructionInfo] = &[
    info(
        Instruction::From,
        "Sets the base image for subsequent instructions and starts a new build stage. `FROM <image>[:<tag>] [AS <name>]`",
        "FROM ${1:image}",
    ),
    info(
        Instruction::Run,
        "Executes any commands in a new layer on top of the current image and commits the results.",
        "RUN ${1:command}",
    ),
    info(
        Instruction::Copy,
        "Copies new files or directories from `<src>` (or another stage with `--from=<name>`) into the filesystem of the image at `<dest>`.",
        "COPY ${1:src} ${2:dest}",
    ),
    info(
        Instruction::Add,
        "Copies new files, directories or remote file URLs from `<src>` and adds them to the image at `<dest>`. Local tar archives are extracted.",
        "ADD ${1:src} ${2:dest}",
    ),
    info(
        Instruction::Workdir,
        "Sets the working directory for any RUN, CMD, ENTRYPOINT, COPY and ADD instructions that follow it.",
        "WORKDIR ${1:path}",
    ),
    info(
        Instruction::Env,
        "Sets the environment variable `<key>` to the value `<value>`, for all subsequent instructions in the build stage.",
        "ENV ${1:key}=${2:value}",
    ),
    info(
        Instruction::Arg,
        "Defines a variable that users can pass at build-time with `--build-arg <varname>=<value>`.",
        "ARG ${1:name}",
    ),
    info(
        Instruction::Expose,
        "Informs Docker that the container listens on the specified network ports at runtime.",
        "EXPOSE ${1:port}",
    ),
    info(
        Instruction::Cmd,
        "Provides defaults for an executing container. There can only be one CMD instruction in a Dockerfile.",
        "CMD [\"${1:executable}\"]",
    ),
    info(
        Instruction::Entrypoint,
        "Configures a container that will run as an executable.",
        "ENTRYPOINT [\"${1:executable}\"]",
    ),
    info(
        Instruction::Label,
        "Adds metadata to an image as key-value pairs.",
        "LABEL ${1:key}=${2:value}",
    ),
    info(
        Instruction::User,
        "Sets the user name (or UID) and optionally the group (or GID) used when running the image and for RUN, CMD and ENTRYPOINT.",
        "USER ${1:user}",
    ),
    info(
        Instruction::Volume,
        "Creates a mount point with the specified name and marks it as holding externally mounted volumes.",
        "VOLUME [\"${1:path}\"]",
    ),
    info(
        Instruction::Healthcheck,
        "Tells Docker how to test a container to check that it is still working. `HEALTHCHECK [OPTIONS] CMD command` or `HEALTHCHECK NONE`.",
        "HEALTHCHECK CMD ${1:command}",
    ),
    info(
        Instruction::Shell,
        "Overrides the default shell used for the shell form of commands.",
        "SHELL [\"${1:executable}\", \"${2:parameters}\"]",
    ),
    info(
        Instruction::Stopsignal,
        "Sets the system call signal that will be sent to the container to exit.",
        "STOPSIGNAL ${1:signal}",
    ),
    info(
        Instruction::Onbuild,
        "Adds a trigger instruction to the image, executed when the image is used as the base for another build.",
        "ONBUILD ${1:INSTRUCTION}",
    ),
    info(
        Instruction::Maintainer,
        "Sets the Author field of the generated images. Deprecated in favour of `LABEL maintainer=<name>`.",
        "MAINTAINER ${1:name}",
    ),
];

impl Instruction {
    /// Upper-cased keyword text; `UNKNOWN` for unrecognised keywords.
    pub fn as_str(self) -> &'static str {
        match self {
            Instruction::From => "FROM",
            Instruction::Run => "RUN",
            Instruction::Cmd => "CMD",
            Instruction::Label => "LABEL",
            Instruction::Maintainer => "MAINTAINER",
            Instruction::Expose => "EXPOSE",
            Instruction::Env => "ENV",
            Instruction::Add => "ADD",
            Instruction::Copy => "COPY",
            Instruction::Entrypoint => "ENTRYPOINT",
            Instruction::Volume => "VOLUME",
            Instruction::User => "USER",
            Instruction::Workdir => "WORKDIR",
            Instruction::Arg => "ARG",
            Instruction::Onbuild => "ONBUILD",
            Instruction::Stopsignal => "STOPSIGNAL",
            Instruction::Healthcheck => "HEALTHCHECK",
            Instruction::Shell => "SHELL",
            Instruction::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(self) -> bool {
        self != Instruction::Unknown
    }

    pub fn info(self) -> Option<&'static InstructionInfo> {
        INSTRUCTIONS.iter().find(|i| i.instruction == self)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
