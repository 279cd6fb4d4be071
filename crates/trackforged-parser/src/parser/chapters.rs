//! Chapter metadata to cut conversion.

use crate::label::safe_label;
use crate::parser::normalize::normalize_labels;
use crate::{Cut, SourceMetadata};

/// Build cuts from a source's chapter list.
///
/// Each chapter ends at its own `end_time`, else the next chapter's
/// `start_time`, else the source duration. Chapters that resolve to an
/// empty window are dropped. Labels are `NN - Title`, numbered by chapter
/// position, with `partNN` standing in for a missing title.
pub fn chapters_to_cuts(meta: &SourceMetadata) -> Vec<Cut> {
    let chapters = &meta.chapters;
    let mut cuts = Vec::with_capacity(chapters.len());

    for (i, chapter) in chapters.iter().enumerate() {
        let number = i + 1;
        let start = chapter.start_time.unwrap_or(0.0);
        let end = chapter
            .end_time
            .or_else(|| chapters.get(i + 1).and_then(|next| next.start_time))
            .or(meta.duration)
            .unwrap_or(start);

        let title = match chapter.title.as_deref() {
            Some(t) if !t.is_empty() => safe_label(t),
            _ => format!("part{:02}", number),
        };

        if let Some(cut) = Cut::new(start, end, format!("{:02} - {}", number, title)) {
            cuts.push(cut);
        }
    }

    normalize_labels(&mut cuts);
    cuts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chapter;

    fn meta(duration: Option<f64>, chapters: Vec<Chapter>) -> SourceMetadata {
        SourceMetadata {
            title: Some("Album".into()),
            duration,
            chapters,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_chapters() {
        assert!(chapters_to_cuts(&meta(Some(100.0), vec![])).is_empty());
    }

    #[test]
    fn test_chains_start_times() {
        let cuts = chapters_to_cuts(&meta(
            Some(300.0),
            vec![
                Chapter::starting_at(0.0).with_title("Intro"),
                Chapter::starting_at(95.5).with_title("Song: One"),
                Chapter::starting_at(200.0),
            ],
        ));

        let got: Vec<_> = cuts.iter().map(|c| (c.start(), c.end(), c.label())).collect();
        assert_eq!(
            got,
            vec![
                (0.0, 95.5, "01 - Intro"),
                (95.5, 200.0, "02 - Song_ One"),
                (200.0, 300.0, "03 - part03"),
            ]
        );
    }

    #[test]
    fn test_explicit_end_time_wins() {
        let cuts = chapters_to_cuts(&meta(
            Some(300.0),
            vec![
                Chapter::starting_at(0.0).with_end(50.0),
                Chapter::starting_at(60.0),
            ],
        ));
        assert_eq!(cuts[0].end(), 50.0);
        assert_eq!(cuts[1].end(), 300.0);
    }

    #[test]
    fn test_empty_chapter_dropped_keeps_numbering() {
        let cuts = chapters_to_cuts(&meta(
            None,
            vec![
                Chapter::starting_at(0.0).with_title("A"),
                Chapter::starting_at(10.0).with_title("B"),
            ],
        ));
        // The last chapter has no end and no duration to fall back to.
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].label(), "01 - A");
    }

    #[test]
    fn test_missing_start_defaults_to_zero() {
        let cuts = chapters_to_cuts(&meta(
            Some(40.0),
            vec![Chapter {
                title: Some("Only".into()),
                ..Default::default()
            }],
        ));
        assert_eq!(cuts[0].start(), 0.0);
        assert_eq!(cuts[0].end(), 40.0);
    }
}
