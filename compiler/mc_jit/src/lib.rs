//! Extern-symbol resolution for the dynamic code generator.
//!
//! The code generator hands over a fixed table of raw target addresses
//! and later asks for each symbolic reference by index, either as an
//! absolute address or as the signed displacement a 4-byte relative
//! field encodes. Pure address arithmetic, no dependency on the AST.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternError {
    #[error("unknown extern symbol {sym}, table holds {count} entries")]
    UnknownSymbol { sym: u32, count: usize },
    #[error("displacement to {target:#x} from site {site:#x} does not fit in 32 bits")]
    DisplacementOverflow { target: u64, site: u64 },
}

/// Indexed table of extern target addresses, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct ExternTable {
    targets: Vec<u64>,
}

impl ExternTable {
    #[must_use]
    pub fn new(targets: Vec<u64>) -> Self {
        ExternTable { targets }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Resolve symbol `sym` for a reference at `site`.
    ///
    /// With `relative` clear the result is the raw target address. With
    /// `relative` set it is the signed displacement from the byte just
    /// past the 4-byte relative field at `site`, and it must fit in an
    /// `i32` so the field can encode it. An out-of-range `sym` is a
    /// hard error, never a silent zero.
    pub fn resolve(&self, sym: u32, site: u64, relative: bool) -> Result<i64, ExternError> {
        let target = *self
            .targets
            .get(sym as usize)
            .ok_or(ExternError::UnknownSymbol {
                sym,
                count: self.targets.len(),
            })?;
        if !relative {
            #[allow(
                clippy::cast_possible_wrap,
                reason = "addresses round-trip through i64 unchanged"
            )]
            return Ok(target as i64);
        }
        let next = site.wrapping_add(4);
        #[allow(
            clippy::cast_possible_wrap,
            reason = "two's-complement wrap is the displacement definition"
        )]
        let disp = target.wrapping_sub(next) as i64;
        if i32::try_from(disp).is_err() {
            return Err(ExternError::DisplacementOverflow { target, site });
        }
        Ok(disp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_returns_the_raw_address() {
        let table = ExternTable::new(vec![0x1000, 0xdead_beef]);
        assert_eq!(table.resolve(0, 0, false), Ok(0x1000));
        assert_eq!(table.resolve(1, 0x9999, false), Ok(0xdead_beef));
    }

    #[test]
    fn relative_measures_from_past_the_field() {
        let table = ExternTable::new(vec![0x2000]);
        // Field at 0x1000, next instruction at 0x1004.
        assert_eq!(table.resolve(0, 0x1000, true), Ok(0x0ffc));
    }

    #[test]
    fn relative_displacement_may_be_negative() {
        let table = ExternTable::new(vec![0x1000]);
        assert_eq!(table.resolve(0, 0x2000, true), Ok(-0x1004));
    }

    #[test]
    fn zero_displacement_at_the_boundary() {
        let table = ExternTable::new(vec![0x1004]);
        assert_eq!(table.resolve(0, 0x1000, true), Ok(0));
    }

    #[test]
    fn out_of_range_symbol_is_an_error() {
        let table = ExternTable::new(vec![0x1000]);
        assert_eq!(
            table.resolve(3, 0, false),
            Err(ExternError::UnknownSymbol { sym: 3, count: 1 })
        );
    }

    #[test]
    fn empty_table_rejects_every_symbol() {
        let table = ExternTable::default();
        assert!(table.is_empty());
        assert_eq!(
            table.resolve(0, 0, true),
            Err(ExternError::UnknownSymbol { sym: 0, count: 0 })
        );
    }

    #[test]
    fn displacement_overflow_is_reported() {
        let table = ExternTable::new(vec![0x1_0000_0000]);
        assert_eq!(
            table.resolve(0, 0, true),
            Err(ExternError::DisplacementOverflow {
                target: 0x1_0000_0000,
                site: 0,
            })
        );
        // Same distance fits once the site moves closer.
        assert!(table.resolve(0, 0xffff_0000, true).is_ok());
    }

    #[test]
    fn displacement_extremes_fit_exactly() {
        let max = i64::from(i32::MAX);
        #[allow(clippy::cast_sign_loss, reason = "max is non-negative")]
        let table = ExternTable::new(vec![4 + max as u64, 0]);
        assert_eq!(table.resolve(0, 0, true), Ok(max));
        let site = i32::MAX as u64 + 1;
        // target 0, next = site + 4 = 2^31 + 4 -> disp just past i32::MIN.
        assert_eq!(
            table.resolve(1, site, true),
            Err(ExternError::DisplacementOverflow { target: 0, site })
        );
        assert_eq!(
            table.resolve(1, i32::MAX as u64 - 3, true),
            Ok(i64::from(i32::MIN))
        );
    }
}
