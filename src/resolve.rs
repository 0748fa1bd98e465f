use crate::dom::Document;
use crate::error::MatchError;
use crate::expectation::TableIdentifier;

// Singularity is enforced here regardless of what the backend guarantees.
pub(crate) fn resolve_table<D: Document>(
    document: &D,
    identifier: &TableIdentifier,
) -> Result<D::Elem, MatchError> {
    let mut found = match identifier {
        TableIdentifier::Id(id) => document.elements_by_id(id),
        TableIdentifier::Label(label) => document.tables_by_label(label),
    };

    if found.len() > 1 {
        return Err(MatchError::AmbiguousTable {
            identifier: identifier.to_string(),
            count: found.len(),
        });
    }

    found.pop().ok_or_else(|| MatchError::TableNotFound {
        identifier: identifier.to_string(),
    })
}
