// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2024

use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExitCodeVariantDoc {
    pub name: String,
    pub value: String,
    pub doc: String,
}

impl ExitCodeVariantDoc {
    pub fn new<N, V, D>(name: N, value: V, doc: D) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
        D: AsRef<str>,
    {
        Self {
            name: name.as_ref().to_string(),
            value: value.as_ref().to_string(),
            doc: doc.as_ref().to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExitCodeDoc {
    pub doc: Option<String>,
    pub variants: Vec<ExitCodeVariantDoc>,
}

/// Renders the exit codes as help text, one line per code.
///
/// Only the first paragraph line of each variant documentation is used.
impl Display for ExitCodeDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self
            .doc
            .as_deref()
            .and_then(|d| d.lines().next())
            .unwrap_or("Exit status");
        write!(f, "{title}:")?;
        let width = self.variants.iter().map(|v| v.value.len()).max().unwrap_or(0);
        for v in &self.variants {
            let summary = v.doc.lines().next().unwrap_or_default();
            write!(f, "\n  {:<width$}  {summary}", v.value)?;
        }
        Ok(())
    }
}

pub trait ExitCodeTrait {
    fn exit_code_doc() -> ExitCodeDoc;
}

pub fn docstring(attr: &str) -> Option<String> {
    let doc = attr.strip_prefix("doc = r\"")?.strip_suffix('\"')?;
    Some(doc.strip_prefix(' ').unwrap_or(doc).to_string())
}

#[macro_export]
macro_rules! impl_exitcodetrait {
    ($(#[$attr:meta])* $vis:vis enum $name:ident $(<$($gen:ident),*>)? {
        $(
        $(#[$variantattr:meta])+ $variant:ident = $tvalue:literal
        ),* $(,)?
    }
    ) => {
        $(#[$attr])*
        $vis enum $name $(<$($gen),*>)? {
            $(
                $(#[$variantattr])+ $variant = $tvalue
            ),*
        }

        impl $crate::ExitCodeTrait for $(<$($gen),*>)? $name $(<$($gen),*>)? {
            fn exit_code_doc() -> $crate::ExitCodeDoc {
                let enum_doc_vec = [$(stringify!($attr)),*].into_iter().map($crate::docstring).filter_map(std::convert::identity).collect::<Vec<_>>();
                let enum_doc = (!enum_doc_vec.is_empty()).then_some(enum_doc_vec.join("\n"));
                let mut variants = vec![];
                $(
                    let name = stringify!($variant).to_string();
                    let value = stringify!($tvalue).to_string();
                    let docs: Vec<_> = [$(stringify!($variantattr)),+].into_iter().map($crate::docstring).filter_map(std::convert::identity).collect();
                    assert!(!docs.is_empty(), "Please add a docstring to enum variant '{name}' of '{}'", stringify!($name));
                    variants.push($crate::ExitCodeVariantDoc { name, value, doc: docs.join("\n")});
                )*
                    $crate::ExitCodeDoc {
                        doc: enum_doc,
                        variants,
                    }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{exit_code::ExitCodeDoc, ExitCodeTrait, ExitCodeVariantDoc};

    #[test]
    fn test_impl_exitcodetrait_with_doc() {
        impl_exitcodetrait!(
            /// Exit status
            ///
            /// Multiline.
            #[repr(u8)]
            #[allow(unused)]
            #[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
            pub enum OwnExitCode {
                /// Key hash reported
                ///
                /// Also used if the keystore is missing.
                Success = 0,
                /// Generic error
                #[default]
                GenericError = 1,
                /// Usage error
                UsageError = 2, // same exit code as used by `Clap` crate
            }
        );

        assert_eq!(
            OwnExitCode::exit_code_doc(),
            ExitCodeDoc {
                doc: Some("Exit status\n\nMultiline.".to_string()),
                variants: vec![
                    ExitCodeVariantDoc::new(
                        "Success",
                        "0",
                        "Key hash reported\n\nAlso used if the keystore is missing."
                    ),
                    ExitCodeVariantDoc::new("GenericError", "1", "Generic error"),
                    ExitCodeVariantDoc::new("UsageError", "2", "Usage error")
                ]
            }
        );

        assert_eq!(OwnExitCode::default(), OwnExitCode::GenericError);
        assert_eq!(
            OwnExitCode::exit_code_doc().to_string(),
            "Exit status:\n  0  Key hash reported\n  1  Generic error\n  2  Usage error"
        );
    }

    #[test]
    fn test_impl_exitcodetrait_without_doc() {
        impl_exitcodetrait!(
            #[repr(u8)]
            #[allow(unused)]
            #[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
            pub enum OwnExitCode {
                /// Key hash reported
                Success = 0,
                /// Generic error
                #[default]
                GenericError = 1,
                /// Keytool failed
                KeytoolFailed = 13,
            }
        );

        let doc = OwnExitCode::exit_code_doc();
        assert_eq!(doc.doc, None);
        assert_eq!(
            doc.variants[2],
            ExitCodeVariantDoc::new("KeytoolFailed", "13", "Keytool failed")
        );
        assert_eq!(
            doc.to_string(),
            "Exit status:\n  0   Key hash reported\n  1   Generic error\n  13  Keytool failed"
        );
    }

    #[test]
    fn docstring_parsing() {
        assert_eq!(
            crate::docstring("doc = r\" Usage error\""),
            Some("Usage error".to_string())
        );
        assert_eq!(crate::docstring("repr(u8)"), None);
    }
}
