use crate::TsPrepError;
use crate::series::ensure_same_len;

/// Combine several masks with a logical OR.
///
/// A point is flagged in the result if any input mask flags it. No masks
/// yields an empty result.
///
/// # Errors
/// Returns `TsPrepError::LengthMismatch` if the masks differ in length.
pub fn combine_masks(masks: &[&[bool]]) -> Result<Vec<bool>, TsPrepError> {
    let Some((first, rest)) = masks.split_first() else {
        return Ok(Vec::new());
    };
    let mut out = first.to_vec();
    for m in rest {
        ensure_same_len("mask", out.len(), m.len())?;
        for (o, &f) in out.iter_mut().zip(m.iter()) {
            *o |= f;
        }
    }
    Ok(out)
}

/// Number of flagged entries.
#[must_use]
pub fn count_flagged(mask: &[bool]) -> usize {
    mask.iter().filter(|&&m| m).count()
}
