//! Family symbol lookup and activation

use crate::elements::Category;
use crate::error::{ModelError, Result};
use crate::host::HostDocument;
use crate::tables::FamilySymbol;

/// First symbol of `category` whose type name and family name match exactly
pub fn find_type<D: HostDocument + ?Sized>(
    doc: &D,
    category: Category,
    family_name: &str,
    type_name: &str,
) -> Option<FamilySymbol> {
    doc.symbols(category)
        .into_iter()
        .find(|s| s.matches(family_name, type_name))
        .cloned()
}

/// [`find_type`], failing with [`ModelError::TypeNotFound`] when absent
pub fn require_type<D: HostDocument + ?Sized>(
    doc: &D,
    category: Category,
    family_name: &str,
    type_name: &str,
) -> Result<FamilySymbol> {
    find_type(doc, category, family_name, type_name).ok_or_else(|| ModelError::TypeNotFound {
        category,
        family: family_name.to_string(),
        type_name: type_name.to_string(),
    })
}

/// Activate `symbol` unless the host already reports it active
pub fn ensure_active<D: HostDocument + ?Sized>(doc: &mut D, symbol: &FamilySymbol) -> Result<()> {
    let active = doc
        .symbol(symbol.id)
        .map(|s| s.is_active())
        .ok_or(ModelError::ElementNotFound(symbol.id))?;
    if !active {
        doc.activate_symbol(symbol.id)?;
        tracing::debug!(
            target: "bim_envelope::catalog",
            family = %symbol.family_name,
            type_name = %symbol.name,
            "symbol activated"
        );
    }
    Ok(())
}
