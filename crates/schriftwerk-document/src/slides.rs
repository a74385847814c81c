// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slide deck writer: a single "Title and Content" slide packed as PPTX.
//
// A presentation is an Office Open XML package: a zip archive of XML parts
// tied together by relationship files. The package assembled here is the
// smallest set PowerPoint and LibreOffice accept: one master, one layout, one
// theme and one slide.

use std::io::{Cursor, Write};
use std::path::Path;

use schriftwerk_core::error::{Result, SchriftwerkError};
use schriftwerk_core::{DEFAULT_SLIDE_TITLE, DocumentFormat, SLIDE_BODY_LINE_LIMIT, split_lines};
use tracing::{debug, instrument, warn};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// A one-slide presentation: a title and up to ten body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    title: String,
    body: String,
}

impl SlideDeck {
    /// Take the first ten lines of `text` as the slide body. The rest is dropped.
    pub fn from_text(text: &str) -> Self {
        let lines = split_lines(text);
        if lines.len() > SLIDE_BODY_LINE_LIMIT {
            warn!(
                total = lines.len(),
                kept = SLIDE_BODY_LINE_LIMIT,
                "Slide body truncated"
            );
        }

        Self {
            title: DEFAULT_SLIDE_TITLE.to_string(),
            body: lines
                .into_iter()
                .take(SLIDE_BODY_LINE_LIMIT)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body placeholder text, lines joined by `\n`.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serialise the deck as a PPTX package.
    #[instrument(skip(self), fields(body_len = self.body.len()))]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let parts: [(&str, String); 11] = [
            ("[Content_Types].xml", content_types_xml()),
            ("_rels/.rels", root_rels_xml()),
            ("ppt/presentation.xml", presentation_xml()),
            ("ppt/_rels/presentation.xml.rels", presentation_rels_xml()),
            ("ppt/slideMasters/slideMaster1.xml", slide_master_xml()),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels",
                slide_master_rels_xml(),
            ),
            ("ppt/slideLayouts/slideLayout1.xml", slide_layout_xml()),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
                relationships(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")]),
            ),
            ("ppt/slides/slide1.xml", self.slide_xml()),
            (
                "ppt/slides/_rels/slide1.xml.rels",
                relationships(&[("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml")]),
            ),
            ("ppt/theme/theme1.xml", theme_xml()),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for (name, xml) in &parts {
            zip.start_file(*name, options).map_err(zip_error)?;
            zip.write_all(xml.as_bytes())?;
        }

        let cursor = zip.finish().map_err(zip_error)?;
        debug!(parts = parts.len(), "Presentation package assembled");

        Ok(cursor.into_inner())
    }

    /// Serialise the deck and write it directly to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        crate::package::persist(&bytes, path.as_ref(), DocumentFormat::SlideDeck)
    }

    fn slide_xml(&self) -> String {
        let title = format!(
            r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#,
            escape_xml(&self.title)
        );

        let body: String = if self.body.is_empty() {
            "<a:p/>".into()
        } else {
            self.body.split('\n').map(paragraph_xml).collect()
        };

        format!(
            "{XML_DECL}<p:sld {NS}><p:cSld><p:spTree>{group}{title_sp}{body_sp}</p:spTree></p:cSld>\
             <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>",
            group = group_shape_props(),
            title_sp = placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, TITLE_FRAME, &title),
            body_sp = placeholder_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, BODY_FRAME, &body),
        )
    }
}

/// Shape frames in EMU: (x, y, cx, cy) on a 4:3 slide.
type Frame = (u64, u64, u64, u64);
const TITLE_FRAME: Frame = (457_200, 274_638, 8_229_600, 1_143_000);
const BODY_FRAME: Frame = (457_200, 1_600_200, 8_229_600, 4_525_963);

fn paragraph_xml(line: &str) -> String {
    if line.is_empty() {
        "<a:p/>".into()
    } else {
        format!(
            r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#,
            escape_xml(line)
        )
    }
}

fn group_shape_props() -> &'static str {
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
}

fn placeholder_shape(id: u32, name: &str, ph: &str, frame: Frame, paragraphs: &str) -> String {
    let (x, y, cx, cy) = frame;
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#
    )
}

fn relationships(entries: &[(&str, &str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, kind, target)| {
            format!(r#"<Relationship Id="{id}" Type="{REL_NS}/{kind}" Target="{target}"/>"#)
        })
        .collect();
    format!(
        r#"{XML_DECL}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{body}</Relationships>"#
    )
}

fn content_types_xml() -> String {
    const PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";
    format!(
        r#"{XML_DECL}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="{PML}.presentation.main+xml"/><Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="{PML}.slideMaster+xml"/><Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="{PML}.slideLayout+xml"/><Override PartName="/ppt/slides/slide1.xml" ContentType="{PML}.slide+xml"/><Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/></Types>"#
    )
}

fn root_rels_xml() -> String {
    relationships(&[("rId1", "officeDocument", "ppt/presentation.xml")])
}

fn presentation_xml() -> String {
    format!(
        r#"{XML_DECL}<p:presentation {NS}><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst><p:sldId id="256" r:id="rId2"/></p:sldIdLst><p:sldSz cx="9144000" cy="6858000" type="screen4x3"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
    )
}

fn presentation_rels_xml() -> String {
    relationships(&[
        ("rId1", "slideMaster", "slideMasters/slideMaster1.xml"),
        ("rId2", "slide", "slides/slide1.xml"),
        ("rId3", "theme", "theme/theme1.xml"),
    ])
}

fn slide_master_xml() -> String {
    format!(
        r#"{XML_DECL}<p:sldMaster {NS}><p:cSld><p:spTree>{group}</p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#,
        group = group_shape_props()
    )
}

fn slide_master_rels_xml() -> String {
    relationships(&[
        ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
        ("rId2", "theme", "../theme/theme1.xml"),
    ])
}

fn slide_layout_xml() -> String {
    let empty = "<a:p/>";
    format!(
        r#"{XML_DECL}<p:sldLayout {NS} type="obj" preserve="1"><p:cSld name="Title and Content"><p:spTree>{group}{title}{body}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        group = group_shape_props(),
        title = placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, TITLE_FRAME, empty),
        body = placeholder_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, BODY_FRAME, empty),
    )
}

fn theme_xml() -> String {
    let colors: String = [
        ("dk1", "000000"),
        ("lt1", "FFFFFF"),
        ("dk2", "1F497D"),
        ("lt2", "EEECE1"),
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ]
    .iter()
    .map(|(name, rgb)| format!(r#"<a:{name}><a:srgbClr val="{rgb}"/></a:{name}>"#))
    .collect();

    let fonts = r#"<a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/>"#;
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#;
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";

    format!(
        r#"{XML_DECL}<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements><a:clrScheme name="Office">{colors}</a:clrScheme><a:fontScheme name="Office"><a:majorFont>{fonts}</a:majorFont><a:minorFont>{fonts}</a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst><a:lnStyleLst>{line}{line}{line}</a:lnStyleLst><a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst><a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // XML 1.0 forbids most control characters outright.
            c if (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r') => {}
            c => out.push(c),
        }
    }
    out
}

fn zip_error(err: zip::result::ZipError) -> SchriftwerkError {
    SchriftwerkError::SlideDeck(err.to_string())
}
