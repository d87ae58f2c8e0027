use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::resume::application::domain::{
    build_resume, layout_document, resume_filename, PageGeometry,
};
use crate::modules::resume::application::ports::incoming::use_cases::{
    GenerateResumeError, GenerateResumeUseCase, ResumeFile,
};
use crate::modules::resume::application::ports::outgoing::{DocumentWriter, ResumeSource};

pub struct GenerateResumeService<S, W>
where
    S: ResumeSource,
    W: DocumentWriter,
{
    source: S,
    writer: W,
    date_stamp: bool,
    geometry: PageGeometry,
}

impl<S, W> GenerateResumeService<S, W>
where
    S: ResumeSource,
    W: DocumentWriter,
{
    pub fn new(source: S, writer: W, date_stamp: bool) -> Self {
        Self {
            source,
            writer,
            date_stamp,
            geometry: PageGeometry::default(),
        }
    }
}

#[async_trait]
impl<S, W> GenerateResumeUseCase for GenerateResumeService<S, W>
where
    S: ResumeSource + Send + Sync,
    W: DocumentWriter + Send + Sync,
{
    async fn execute(&self) -> Result<ResumeFile, GenerateResumeError> {
        let content = self.source.load().await?;

        let document = build_resume(&content);
        let pages = layout_document(&document, &self.geometry);
        let bytes = self.writer.write(&pages, &document.document_title())?;

        let stamp = self.date_stamp.then(|| Utc::now().date_naive());
        let filename = resume_filename(content.profile.as_ref(), stamp);

        info!(
            filename = %filename,
            pages = pages.len(),
            bytes = bytes.len(),
            "Resume generated"
        );

        Ok(ResumeFile::pdf(filename, bytes))
    }
}
