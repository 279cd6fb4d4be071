//! Cut label normalization.

use crate::Cut;

/// Give every unlabeled cut a positional `partNN` label.
///
/// Numbering is the 1-based position in `cuts`. Cuts that already carry a
/// label are left alone, so running this twice changes nothing.
pub fn normalize_labels(cuts: &mut [Cut]) {
    for (idx, cut) in cuts.iter_mut().enumerate() {
        if cut.label().is_empty() {
            cut.set_label(format!("part{:02}", idx + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_only_empty_labels() {
        let mut cuts = vec![
            Cut::new(0.0, 10.0, "").unwrap(),
            Cut::new(10.0, 20.0, "Chorus").unwrap(),
            Cut::new(20.0, 30.0, "").unwrap(),
        ];
        normalize_labels(&mut cuts);

        let labels: Vec<_> = cuts.iter().map(Cut::label).collect();
        assert_eq!(labels, vec!["part01", "Chorus", "part03"]);
    }

    #[test]
    fn test_idempotent() {
        let mut cuts = vec![Cut::new(0.0, 1.0, "").unwrap(), Cut::new(1.0, 2.0, "").unwrap()];
        normalize_labels(&mut cuts);
        let once = cuts.clone();
        normalize_labels(&mut cuts);
        assert_eq!(cuts, once);
    }

    #[test]
    fn test_wide_numbering() {
        let mut cuts: Vec<Cut> = (0..120)
            .map(|i| Cut::new(i as f64, i as f64 + 1.0, "").unwrap())
            .collect();
        normalize_labels(&mut cuts);
        assert_eq!(cuts[8].label(), "part09");
        assert_eq!(cuts[119].label(), "part120");
    }
}
