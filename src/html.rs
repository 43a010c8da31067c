use crate::entities::{Bookmark, Folder};
use chrono::{DateTime, Utc};
use std::io::{self, Write};

/// The fixed document header of the Netscape bookmark format.
pub const DOCUMENT_HEADER: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!--This is an automatically generated file.
    It will be read and overwritten.
    Do Not Edit! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<Title>Bookmarks</Title>
<H1>Bookmarks</H1>
<DL><p>
"#;

/// The fixed document footer.
pub const DOCUMENT_FOOTER: &str = "</DL>\n";

fn epoch_seconds(timestamp: Option<DateTime<Utc>>) -> i64 {
    timestamp.map_or(0, |timestamp| timestamp.timestamp())
}

/// Serialize one folder and its loaded bookmarks as a folder block.
///
/// Bookmarks are sorted by title, ascending, using ordinal string
/// comparison; the sort is stable, so duplicate titles keep their fetched
/// order. Timestamps are rendered as Unix epoch seconds.
pub fn write_folder(writer: &mut impl Write, folder: &Folder) -> io::Result<()> {
    writeln!(
        writer,
        "<DT><H3 ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">{}</H3>",
        epoch_seconds(folder.created),
        epoch_seconds(folder.modified),
        folder.name
    )?;
    writeln!(writer, "<DL><p>")?;

    let mut bookmarks = folder.bookmarks.iter().collect::<Vec<_>>();
    bookmarks.sort_by(|a, b| a.title.cmp(&b.title));

    for bookmark in bookmarks {
        write_bookmark(writer, bookmark)?;
    }

    writeln!(writer, "</DL><p>")
}

fn write_bookmark(writer: &mut impl Write, bookmark: &Bookmark) -> io::Result<()> {
    writeln!(
        writer,
        "<DT><A HREF=\"{}\" ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">{}</A>",
        bookmark.url,
        epoch_seconds(bookmark.created),
        epoch_seconds(bookmark.modified),
        bookmark.title
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn folder_with_bookmarks(titles: &[(&str, &str)]) -> Folder {
        let mut folder = serde_json::from_value::<Folder>(json!({
            "id": "f1",
            "name": "dev",
            "created": "2019-01-01T12:00:00Z",
            "modified": "2019-06-01T12:00:00Z"
        }))
        .unwrap();
        folder.bookmarks = titles
            .iter()
            .map(|(title, url)| {
                serde_json::from_value::<Bookmark>(json!({
                    "id": null,
                    "title": title,
                    "url": url,
                    "created": "2019-02-01T00:00:00Z",
                    "modified": "2019-02-01T00:00:00Z"
                }))
                .unwrap()
            })
            .collect();
        folder
    }

    fn render(folder: &Folder) -> String {
        let mut buffer = Vec::new();
        write_folder(&mut buffer, folder).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_folder_block() {
        let folder = folder_with_bookmarks(&[("x", "http://x/")]);

        let created = Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap();
        let modified = Utc.with_ymd_and_hms(2019, 6, 1, 12, 0, 0).unwrap();
        let bookmark_ts = Utc.with_ymd_and_hms(2019, 2, 1, 0, 0, 0).unwrap();

        assert_eq!(
            render(&folder),
            format!(
                "<DT><H3 ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">dev</H3>\n\
                 <DL><p>\n\
                 <DT><A HREF=\"http://x/\" ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">x</A>\n\
                 </DL><p>\n",
                created.timestamp(),
                modified.timestamp(),
                bookmark_ts.timestamp(),
                bookmark_ts.timestamp()
            )
        );
    }

    #[test]
    fn test_bookmarks_sorted_by_title() {
        let folder = folder_with_bookmarks(&[
            ("b", "http://b/"),
            ("a", "http://a/"),
            ("c", "http://c/"),
        ]);

        let output = render(&folder);
        let titles = output
            .lines()
            .filter(|line| line.starts_with("<DT><A"))
            .map(|line| line.split('>').nth(2).unwrap().trim_end_matches("</A"))
            .collect::<Vec<_>>();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_titles_keep_fetched_order() {
        let folder = folder_with_bookmarks(&[
            ("a", "http://first/"),
            ("a", "http://second/"),
        ]);

        let output = render(&folder);
        let first = output.find("http://first/").unwrap();
        let second = output.find("http://second/").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_folder_has_no_anchor_lines() {
        let folder = folder_with_bookmarks(&[]);

        let output = render(&folder);
        assert!(!output.contains("<DT><A"));
        assert!(output.contains("<DL><p>"));
        assert!(output.contains("</DL><p>"));
    }
}
