use serde::{Deserialize, Serialize};

/// A surat keterangan (certificate letter) record.
///
/// Optional fields that were never set are omitted from the JSON output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Surat {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub akta_notaris: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gambar: Option<String>,
}

/// Body of `POST /api/surat`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSurat {
    pub name: Option<String>,
    pub letter_number: Option<String>,
    pub akta_notaris: Option<String>,
    pub gambar: Option<String>,
}

impl NewSurat {
    /// True when at least one of `letterNumber`, `aktaNotaris` or `gambar` is non-empty.
    pub fn has_reference(&self) -> bool {
        [&self.letter_number, &self.akta_notaris, &self.gambar]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }

    pub fn into_surat(self, id: u64) -> Surat {
        Surat {
            id,
            name: self.name,
            letter_number: Some(self.letter_number.unwrap_or_default()),
            akta_notaris: Some(self.akta_notaris.unwrap_or_default()),
            gambar: Some(self.gambar.unwrap_or_default()),
        }
    }
}

/// Body of `PUT /api/surat/{id}`.
///
/// `name` always replaces the stored value. The reference fields only
/// replace it when present in the body; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuratUpdate {
    pub name: Option<String>,
    pub letter_number: Option<String>,
    pub akta_notaris: Option<String>,
    pub gambar: Option<String>,
}

impl SuratUpdate {
    pub fn apply_to(self, surat: &mut Surat) {
        surat.name = self.name;
        if let Some(letter_number) = self.letter_number {
            surat.letter_number = Some(letter_number);
        }
        if let Some(akta_notaris) = self.akta_notaris {
            surat.akta_notaris = Some(akta_notaris);
        }
        if let Some(gambar) = self.gambar {
            surat.gambar = Some(gambar);
        }
    }
}
