use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{Message, Role};

const ADVISOR_INSTRUCTION: &str = "Eres un asistente financiero experto llamado Finanwise AI. Ayudas a los usuarios con presupuestos, ahorro, inversión y educación financiera. Eres amable, profesional y motivador. Responde siempre en español.";
const DOCUMENT_INSTRUCTION: &str = "Eres un experto en análisis de documentos financieros.";

pub const RECEIPT_PROMPT: &str = "Analiza este documento financiero, recibo o factura y extrae los datos clave como monto total, fecha, proveedor y categoría de gasto.";
pub const VIDEO_PROMPT: &str = "Analiza este video de educación financiera y resume los puntos más importantes.";

pub const GREETING: &str = "¡Hola! Soy tu asistente de Finanwise. ¿En qué puedo ayudarte hoy? Puedo analizar tus gastos, ayudarte con un presupuesto o explicarte conceptos complejos.";
pub const EMPTY_REPLY: &str = "Lo siento, hubo un error.";
pub const CONNECTION_FAILED: &str = "Error al conectar con la IA.";
pub const ANALYSIS_FAILED: &str = "Error durante el análisis.";

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("model endpoint answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("model returned no text")]
    Empty,
}

pub fn greeting() -> Message {
    Message::new(Role::Model, GREETING)
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline(mime_type: &str, data: &str) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateResponse {
    /// Joined text parts of the first candidate, `None` when blank.
    pub fn text(&self) -> Option<String> {
        let joined: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

fn instruction(text: &str) -> Content {
    Content {
        role: None,
        parts: vec![Part::text(text)],
    }
}

/// Conversation turns for a chat request. Anything before the first user
/// turn (the greeting) is left out because the API expects the user to
/// speak first. A failed exchange never reached the model, so both the
/// question and the local error text are dropped.
pub fn chat_request(history: &[Message], message: &str) -> GenerateRequest {
    let mut contents: Vec<Content> = Vec::new();
    for m in history.iter().skip_while(|m| m.role != Role::User) {
        if m.failed {
            if contents.last().and_then(|c| c.role.as_deref()) == Some(Role::User.as_str()) {
                contents.pop();
            }
            continue;
        }
        contents.push(Content {
            role: Some(m.role.as_str().to_string()),
            parts: vec![Part::text(m.text.clone())],
        });
    }
    contents.push(Content {
        role: Some(Role::User.as_str().to_string()),
        parts: vec![Part::text(message)],
    });

    GenerateRequest {
        contents,
        system_instruction: Some(instruction(ADVISOR_INSTRUCTION)),
    }
}

pub fn media_request(
    data: &str,
    mime_type: &str,
    prompt: &str,
    default_prompt: &str,
    system: Option<&str>,
) -> GenerateRequest {
    let prompt = if prompt.trim().is_empty() {
        default_prompt
    } else {
        prompt
    };
    GenerateRequest {
        contents: vec![Content {
            role: Some(Role::User.as_str().to_string()),
            parts: vec![Part::inline(mime_type, data), Part::text(prompt)],
        }],
        system_instruction: system.map(instruction),
    }
}

/// Splits `data:<mime>;base64,<payload>` as produced by a file reader.
pub fn split_data_url(url: &str) -> Option<(String, String)> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    Some((mime.to_string(), payload.to_string()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeminiClient {
    config: AppConfig,
}

impl GeminiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_base, self.config.model, key
        )
    }

    async fn generate(&self, body: &GenerateRequest) -> Result<String, AssistantError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingApiKey)?;

        log::debug!(
            "calling {} with {} turn(s)",
            self.config.model,
            body.contents.len()
        );
        let resp = Request::post(&self.endpoint(key)).json(body)?.send().await?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AssistantError::Status { status, body });
        }

        let parsed: GenerateResponse = resp.json().await?;
        parsed.text().ok_or(AssistantError::Empty)
    }

    pub async fn chat(&self, history: &[Message], message: &str) -> Result<String, AssistantError> {
        self.generate(&chat_request(history, message)).await
    }

    pub async fn analyze_image(
        &self,
        data: &str,
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, AssistantError> {
        let body = media_request(data, mime_type, prompt, RECEIPT_PROMPT, Some(DOCUMENT_INSTRUCTION));
        self.generate(&body).await
    }

    pub async fn analyze_video(
        &self,
        data: &str,
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, AssistantError> {
        let body = media_request(data, mime_type, prompt, VIDEO_PROMPT, None);
        self.generate(&body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_carries_history_without_greeting() {
        let history = vec![
            greeting(),
            Message::new(Role::User, "¿Cómo ahorro?"),
            Message::new(Role::Model, "Empezá con un presupuesto."),
        ];
        let request = chat_request(&history, "¿Y después?");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["contents"],
            json!([
                {"role": "user", "parts": [{"text": "¿Cómo ahorro?"}]},
                {"role": "model", "parts": [{"text": "Empezá con un presupuesto."}]},
                {"role": "user", "parts": [{"text": "¿Y después?"}]},
            ])
        );
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            json!(ADVISOR_INSTRUCTION)
        );
    }

    #[test]
    fn failed_exchanges_stay_out_of_the_history() {
        let history = vec![
            greeting(),
            Message::new(Role::User, "¿Cuánto gasté?"),
            Message::failure(CONNECTION_FAILED),
            Message::new(Role::User, "¿Cómo ahorro?"),
            Message::new(Role::Model, "Empezá con un presupuesto."),
        ];
        let value = serde_json::to_value(chat_request(&history, "¿Y después?")).unwrap();

        assert_eq!(
            value["contents"],
            json!([
                {"role": "user", "parts": [{"text": "¿Cómo ahorro?"}]},
                {"role": "model", "parts": [{"text": "Empezá con un presupuesto."}]},
                {"role": "user", "parts": [{"text": "¿Y después?"}]},
            ])
        );
    }

    #[test]
    fn media_request_puts_data_before_prompt() {
        let request = media_request("QUJD", "image/png", "", RECEIPT_PROMPT, Some(DOCUMENT_INSTRUCTION));
        let value = serde_json::to_value(&request).unwrap();
        let parts = &value["contents"][0]["parts"];

        assert_eq!(parts[0], json!({"inlineData": {"mimeType": "image/png", "data": "QUJD"}}));
        assert_eq!(parts[1]["text"], json!(RECEIPT_PROMPT));
    }

    #[test]
    fn video_request_has_no_system_instruction() {
        let request = media_request("AA", "video/mp4", "Resumí", VIDEO_PROMPT, None);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_none());
        assert_eq!(value["contents"][0]["parts"][1]["text"], json!("Resumí"));
    }

    #[test]
    fn response_text_joins_first_candidate() {
        let resp: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Total: "}, {"text": "$1.200"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("Total: $1.200"));
    }

    #[test]
    fn blank_or_missing_candidates_have_no_text() {
        let empty: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);

        let blank: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn data_urls_split_into_mime_and_payload() {
        assert_eq!(
            split_data_url("data:image/jpeg;base64,/9j/4AAQ"),
            Some(("image/jpeg".to_string(), "/9j/4AAQ".to_string()))
        );
        assert_eq!(split_data_url("image/jpeg;base64,xx"), None);
        assert_eq!(split_data_url("data:text/plain,hola"), None);
    }

    #[test]
    fn endpoint_uses_configured_model() {
        let client = GeminiClient::new(AppConfig::resolve(
            Some("k"),
            Some("gemini-x"),
            Some("http://localhost:9000"),
            None,
        ));
        assert_eq!(
            client.endpoint("k"),
            "http://localhost:9000/v1beta/models/gemini-x:generateContent?key=k"
        );
    }
}
