//! Wind driven ocean transports.
//!
//! The calculators use the stresses already in the dataset, so stresses computed beforehand with
//! a custom `BulkFormula` are used as they are. A missing stress is computed with the default
//! `BulkFormula` and attached together with the transport. Nothing is attached when a calculation
//! fails.

use crate::{
    bulk_formula::BulkFormula,
    dataset::{DataArray, Dataset},
    error::Result,
    keys::DerivedField,
};
use log::debug;
use std::borrow::Cow;

mod ekman;
pub use ekman::{eastward_ekman_transport, northward_ekman_transport};
pub(crate) use ekman::{eastward_ekman_field, northward_ekman_field};
mod sverdrup;
pub use sverdrup::sverdrup_transport;
pub(crate) use sverdrup::sverdrup_field;

/// The `stress` field of the dataset, or a new one computed from `wind_component` with the
/// default `BulkFormula` if it is missing.
fn stress_or_default<'a>(
    ds: &'a Dataset,
    stress: DerivedField,
    wind_component: &str,
) -> Result<Cow<'a, DataArray>> {
    if ds.contains(stress.as_ref()) {
        return ds.field(stress.as_ref()).map(Cow::Borrowed);
    }

    debug!("{} missing, computing it with the default bulk formula", stress);
    BulkFormula::default()
        .stress(ds, wind_component)
        .map(Cow::Owned)
}

/// The stress if it was computed by `stress_or_default` and still has to be attached.
fn computed(tau: Cow<DataArray>) -> Option<DataArray> {
    match tau {
        Cow::Owned(tau) => Some(tau),
        Cow::Borrowed(_) => None,
    }
}

fn attach_computed(ds: &mut Dataset, stress: DerivedField, tau: Option<DataArray>) -> Result<()> {
    match tau {
        Some(tau) => {
            debug!("attaching {}", stress);
            ds.insert_field(stress.as_ref(), tau)
        }
        None => Ok(()),
    }
}
