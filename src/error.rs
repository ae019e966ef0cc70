use thiserror::Error;

pub type OncobandResult<T> = Result<T, OncobandError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OncobandError {
    /// A layout engine was asked to compute before a required field was set.
    /// The payload is the builder method name of the missing field.
    #[error("required configuration field `{0}` is unset")]
    MissingField(&'static str),

    #[error(
        "there must be one facet for each domain value: found {facets} facets and {domain} domain values"
    )]
    FacetLengthMismatch { facets: usize, domain: usize },

    #[error("a domain must be set before a facet can be assigned")]
    FacetWithoutDomain,

    #[error("duplicate domain value `{0}`: domain keys must be unique")]
    DuplicateDomainValue(String),
}
