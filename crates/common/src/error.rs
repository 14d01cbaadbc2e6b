use thiserror::Error;

/// Closed set of failures the polling pipeline can produce.
///
/// Variants carry structured context (url, status code, offending field) so
/// callers branch on the kind instead of parsing message text. The rendered
/// `Display` string doubles as the error's signature for duplicate
/// suppression: two errors are "the same" iff they render identically.
#[derive(Debug, Error)]
pub enum BotError {
    /// Transport-level failure reaching the upstream API (connect, DNS, timeout).
    #[error("{url} недоступен. Ошибка: {source}")]
    EndpointUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success HTTP status.
    #[error("{url} недоступен. Код ответа API: {status}")]
    UpstreamStatus { url: String, status: u16 },

    /// Upstream body could not be parsed as JSON.
    #[error("Ответ от API не является корректным JSON: {0}")]
    MalformedBody(#[source] reqwest::Error),

    /// Upstream body was empty.
    #[error("Ответ от API пришёл пустым")]
    EmptyResponse,

    /// Upstream body had the wrong structural type.
    #[error("Неожиданная структура ответа API: {0}")]
    Shape(&'static str),

    /// A required top-level key is absent from the response.
    #[error("В ответе API нет ожидаемого ключа '{0}'")]
    MissingKey(&'static str),

    /// A work item has no name, or an empty one.
    #[error("У домашней работы отсутствует имя")]
    MissingName,

    /// A work item has no `status` key at all.
    #[error("У домашней работы отсутствует ключ 'status'")]
    MissingStatusKey,

    /// A work item's status is not one of the recognized verdict codes.
    #[error("Неизвестный статус домашней работы: {0}")]
    UnknownVerdict(String),

    /// Message delivery to the chat failed.
    #[error("Сообщение в чат не отправлено: {0}")]
    Delivery(String),
}

impl BotError {
    /// Signature used to decide whether two errors count as duplicates.
    pub fn signature(&self) -> String {
        self.to_string()
    }
}
