//! Font face resolution with graceful degradation.
//!
//! A configured font that cannot be read or parsed is never fatal: the
//! render falls back to the system sans-serif family, and if no usable
//! face exists at all, text draws become no-ops.

use std::sync::Arc;

use once_cell::sync::OnceCell;

/// Raw bytes of one font file plus the face index inside it.
#[derive(Clone, Debug)]
pub(crate) struct FontFace {
    pub(crate) bytes: Arc<Vec<u8>>,
    pub(crate) index: u32,
}

/// Faces selected for one render. Either role may be absent.
#[derive(Clone, Debug, Default)]
pub(crate) struct FontSet {
    pub(crate) regular: Option<FontFace>,
    pub(crate) bold: Option<FontFace>,
}

/// Load the configured font, or fall back to the system sans-serif family.
pub(crate) async fn resolve_fonts(font_path: Option<&str>) -> FontSet {
    if let Some(path) = font_path {
        match tokio::fs::read(path).await {
            Ok(bytes) if font_data_is_usable(&bytes) => {
                // The custom face serves both roles; bold runs reuse it.
                let face = FontFace {
                    bytes: Arc::new(bytes),
                    index: 0,
                };
                return FontSet {
                    regular: Some(face.clone()),
                    bold: Some(face),
                };
            }
            Ok(_) => {
                tracing::warn!(path, "font file not usable, using system sans-serif");
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "font file unreadable, using system sans-serif");
            }
        }
    }
    system_sans().clone()
}

fn font_data_is_usable(bytes: &[u8]) -> bool {
    let mut db = fontdb::Database::new();
    db.load_font_data(bytes.to_vec());
    !db.is_empty()
}

/// System sans-serif faces, resolved once per process.
fn system_sans() -> &'static FontSet {
    static SYSTEM: OnceCell<FontSet> = OnceCell::new();
    SYSTEM.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let set = FontSet {
            regular: query_face(&db, fontdb::Weight::NORMAL),
            bold: query_face(&db, fontdb::Weight::BOLD),
        };
        if set.regular.is_none() && set.bold.is_none() {
            tracing::warn!("no system sans-serif font found, text will be skipped");
        }
        set
    })
}

fn query_face(db: &fontdb::Database, weight: fontdb::Weight) -> Option<FontFace> {
    let id = db.query(&fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        weight,
        ..fontdb::Query::default()
    })?;
    let (source, index) = db.face_source(id)?;
    let bytes = match source {
        fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        fontdb::Source::File(path) => std::fs::read(path).ok()?,
        fontdb::Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };
    Some(FontFace {
        bytes: Arc::new(bytes),
        index,
    })
}
