use super::options::GroupingStrategy;
use crate::provider::GroupingSizesV1;

/// Whether a grouping separator follows the digit at `magnitude` in a number
/// whose most significant integer digit sits at `upper_magnitude`.
pub(crate) fn check(
    upper_magnitude: i16,
    magnitude: i16,
    strategy: GroupingStrategy,
    sizes: &GroupingSizesV1,
) -> bool {
    let primary = i16::from(sizes.primary);
    if primary == 0 || magnitude < primary {
        return false;
    }
    let min_grouping = match strategy {
        GroupingStrategy::Never => return false,
        GroupingStrategy::Auto => i16::from(sizes.min_grouping.max(1)),
        GroupingStrategy::Always => 1,
        GroupingStrategy::Min2 => i16::from(sizes.min_grouping.max(2)),
    };
    if upper_magnitude < primary + min_grouping - 1 {
        return false;
    }
    let secondary = match sizes.secondary {
        0 => primary,
        n => i16::from(n),
    };
    (magnitude - primary) % secondary == 0
}
