use crate::collection::NemoCollection;
use log::debug;
use std::io::Write;

/// Writes one line to `writer` for every discrepancy between `expected` and
/// `actual`.
///
/// Mismatches are reported in a fixed order: label counts, label sets, labels
/// missing from either side, then per-label motif misses with the percentage
/// of the actual collection they amount to. A clean match writes nothing.
pub fn print_mismatches(
    writer: &mut dyn Write,
    expected: &NemoCollection,
    actual: &NemoCollection,
) -> std::io::Result<()> {
    if expected.len() != actual.len() {
        writeln!(
            writer,
            "Mismatch in length: expected = {} actual = {}",
            expected.len(),
            actual.len()
        )?;
    }
    if !expected.labels().eq(actual.labels()) {
        writeln!(
            writer,
            "Mismatch in keys: expected = {:?} actual = {:?}",
            expected.labels().collect::<Vec<_>>(),
            actual.labels().collect::<Vec<_>>()
        )?;
    }
    let mut misses = Vec::new();
    for (label, motifs) in expected.iter() {
        if let Some(actual_motifs) = actual.get(label) {
            let mut num_missing = 0;
            for motif in motifs.iter() {
                if !actual_motifs.contains(motif) {
                    debug!("label {}: expected motif {} not in actual", label, motif);
                    num_missing += 1;
                }
            }
            if num_missing != 0 {
                misses.push((label, num_missing, actual_motifs.len()));
            }
        } else {
            writeln!(
                writer,
                "Label {} present in expected but missing from actual",
                label
            )?;
        }
    }
    for (label, _) in actual.iter() {
        if expected.get(label).is_none() {
            writeln!(
                writer,
                "Label {} present in actual but missing from expected",
                label
            )?;
        }
    }
    for (label, num_missing, num_actual) in misses {
        let percentage = if num_actual == 0 {
            100.0
        } else {
            num_missing as f64 / num_actual as f64 * 100.0
        };
        writeln!(
            writer,
            "Mismatch in motifs for label {}: {} missing from actual ({:.1}%)",
            label, num_missing, percentage
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(expected: &str, actual: &str) -> String {
        let expected = NemoCollection::read(expected.as_bytes()).unwrap();
        let actual = NemoCollection::read(actual.as_bytes()).unwrap();
        let mut buf = Vec::new();
        print_mismatches(&mut buf, &expected, &actual).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(report("A\n[[1, 2], [3, 4]]\n", "A\n[[1, 2], [3, 4]]\n"), "");
    }

    #[test]
    fn test_reordered_elements_match() {
        assert_eq!(report("A\n[[2, 1]]\n", "A\n[[1, 2]]\n"), "");
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(
            report("A\n[[1, 2]]\nB\n[[3, 4]]\n", "A\n[[1, 2]]\n"),
            "Mismatch in length: expected = 2 actual = 1\n\
             Mismatch in keys: expected = [\"A\", \"B\"] actual = [\"A\"]\n\
             Label B present in expected but missing from actual\n"
        );
    }

    #[test]
    fn test_extra_label() {
        assert_eq!(
            report("A\n[[1, 2]]\n", "A\n[[1, 2]]\nB\n[[3, 4]]\n"),
            "Mismatch in length: expected = 1 actual = 2\n\
             Mismatch in keys: expected = [\"A\"] actual = [\"A\", \"B\"]\n\
             Label B present in actual but missing from expected\n"
        );
    }

    #[test]
    fn test_extra_motif_in_actual_not_a_miss() {
        assert_eq!(report("A\n[[1, 2]]\n", "A\n[[1, 2], [9, 9]]\n"), "");
    }

    #[test]
    fn test_partial_mismatch_percentage() {
        assert_eq!(
            report(
                "A\n[[1, 2], [3, 4]]\n",
                "A\n[[1, 2], [5, 6], [7, 8], [9, 10]]\n"
            ),
            "Mismatch in motifs for label A: 1 missing from actual (25.0%)\n"
        );
    }

    #[test]
    fn test_empty_actual_collection() {
        assert_eq!(
            report("A\n[[1, 2]]\n", "A\n[]\n"),
            "Mismatch in motifs for label A: 1 missing from actual (100.0%)\n"
        );
    }

    #[test]
    fn test_key_mismatch_symmetry() {
        let left = report("A\n[]\nB\n[]\n", "A\n[]\nC\n[]\n");
        let right = report("A\n[]\nC\n[]\n", "A\n[]\nB\n[]\n");
        assert!(left.contains("Label B present in expected but missing from actual"));
        assert!(left.contains("Label C present in actual but missing from expected"));
        assert!(right.contains("Label C present in expected but missing from actual"));
        assert!(right.contains("Label B present in actual but missing from expected"));
    }
}
