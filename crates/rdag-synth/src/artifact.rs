//! Artifact kinds: the unit of output of one generation run.

use std::fmt;

/// One artifact the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    RunnersHeader,
    RunnersSource,
    DispatchHeader,
    DispatchSource,
    ExpressionHeader,
    ExpressionSource,
    NumericHeader,
    NumericSource,
    ExprEnumHeader,
    ExprEnumJava,
    ExprEnumJson,
    CreateExprSource,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 12] = [
        ArtifactKind::RunnersHeader,
        ArtifactKind::RunnersSource,
        ArtifactKind::DispatchHeader,
        ArtifactKind::DispatchSource,
        ArtifactKind::ExpressionHeader,
        ArtifactKind::ExpressionSource,
        ArtifactKind::NumericHeader,
        ArtifactKind::NumericSource,
        ArtifactKind::ExprEnumHeader,
        ArtifactKind::ExprEnumJava,
        ArtifactKind::ExprEnumJson,
        ArtifactKind::CreateExprSource,
    ];

    /// Conventional file name of the artifact in the runtime's source tree.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ArtifactKind::RunnersHeader => "runners.hh",
            ArtifactKind::RunnersSource => "runners.cc",
            ArtifactKind::DispatchHeader => "dispatch.hh",
            ArtifactKind::DispatchSource => "dispatch.cc",
            ArtifactKind::ExpressionHeader => "expression.hh",
            ArtifactKind::ExpressionSource => "expression.cc",
            ArtifactKind::NumericHeader => "numeric.hh",
            ArtifactKind::NumericSource => "numeric.cc",
            ArtifactKind::ExprEnumHeader => "exprenum.hh",
            ArtifactKind::ExprEnumJava => "ExprTypeEnum.java",
            ArtifactKind::ExprEnumJson => "exprenum.json",
            ArtifactKind::CreateExprSource => "createexpr.cc",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_file_name())
    }
}
