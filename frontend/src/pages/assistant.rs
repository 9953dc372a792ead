use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::assistant::{
    greeting, split_data_url, AssistantError, GeminiClient, ANALYSIS_FAILED, CONNECTION_FAILED,
    EMPTY_REPLY,
};
use crate::components::icons::{icon_check_circle, icon_send, icon_sparkles, icon_upload};
use crate::config::AppConfig;
use crate::models::{Message, Role};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Chat,
    Image,
    Video,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Chat, Tab::Image, Tab::Video];

    fn label(&self) -> &'static str {
        match self {
            Tab::Chat => "Chat",
            Tab::Image => "Análisis de Recibos",
            Tab::Video => "Análisis de Videos",
        }
    }
}

/// Chat history kept in a reducer so replies landing after an await append to
/// the latest log instead of a stale copy.
#[derive(Clone, PartialEq)]
struct ChatLog {
    messages: Vec<Message>,
    waiting: bool,
}

enum ChatAction {
    Ask(String),
    Reply(Message),
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![greeting()],
            waiting: false,
        }
    }
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Ask(text) => {
                next.messages.push(Message::new(Role::User, text));
                next.waiting = true;
            }
            ChatAction::Reply(message) => {
                next.messages.push(message);
                next.waiting = false;
            }
        }
        Rc::new(next)
    }
}

fn reply_message(result: Result<String, AssistantError>) -> Message {
    match result {
        Ok(text) => Message::new(Role::Model, text),
        Err(AssistantError::Empty) => Message::failure(EMPTY_REPLY),
        Err(e) => {
            log::error!("chat request failed: {}", e);
            Message::failure(CONNECTION_FAILED)
        }
    }
}

fn client() -> GeminiClient {
    GeminiClient::new(AppConfig::from_build_env())
}

#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let tab = use_state(|| Tab::Chat);

    let tabs = html! {
        <div class="flex bg-card-light dark:bg-card-dark rounded-xl p-1 border border-border-light dark:border-border-dark w-fit shadow-sm">
            { for Tab::ALL.into_iter().map(|t| {
                let class_name = if *tab == t {
                    "px-6 py-2 rounded-lg text-sm font-bold bg-primary text-[#102216]"
                } else {
                    "px-6 py-2 rounded-lg text-sm font-bold opacity-70"
                };
                let tab = tab.clone();
                html! {
                    <button key={t.label()} class={class_name} onclick={Callback::from(move |_| tab.set(t))}>{ t.label() }</button>
                }
            }) }
        </div>
    };

    html! {
        <div class="flex flex-col h-full max-w-5xl mx-auto w-full p-4 md:p-8 gap-6">
            <header class="flex flex-col gap-2">
                <h1 class="text-3xl font-black flex items-center gap-3">
                    <span class="p-2 bg-primary/20 text-primary rounded-xl">{ icon_sparkles() }</span>
                    {"Finanwise Intelligence"}
                </h1>
                <p class="opacity-70 text-sm font-medium">{"Potenciando tus finanzas con Gemini"}</p>
            </header>
            { tabs }
            <div class="flex-1 min-h-[420px] bg-card-light dark:bg-card-dark rounded-2xl border border-border-light dark:border-border-dark shadow-xl overflow-hidden flex flex-col">
                {
                    match *tab {
                        Tab::Chat => html! { <ChatPanel /> },
                        Tab::Image => html! { <MediaPanel key="image" video={false} /> },
                        Tab::Video => html! { <MediaPanel key="video" video={true} /> },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(ChatPanel)]
fn chat_panel() -> Html {
    let chat = use_reducer(ChatLog::default);
    let input = use_state(String::new);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(el) = e.target_dyn_into::<HtmlInputElement>() {
                input.set(el.value());
            }
        })
    };

    let on_send = {
        let chat = chat.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = input.trim().to_string();
            if text.is_empty() || chat.waiting {
                return;
            }
            let history = chat.messages.clone();
            chat.dispatch(ChatAction::Ask(text.clone()));
            input.set(String::new());

            let chat = chat.clone();
            spawn_local(async move {
                let result = client().chat(&history, &text).await;
                chat.dispatch(ChatAction::Reply(reply_message(result)));
            });
        })
    };

    html! {
        <>
            <div class="flex-1 overflow-y-auto p-6 flex flex-col gap-4">
                { for chat.messages.iter().enumerate().map(|(i, m)| {
                    let (row, bubble) = match m.role {
                        Role::User => ("flex justify-end", "max-w-[80%] rounded-2xl p-4 bg-primary text-[#102216] font-medium rounded-tr-none"),
                        Role::Model => ("flex justify-start", "max-w-[80%] rounded-2xl p-4 border border-border-light dark:border-border-dark rounded-tl-none whitespace-pre-wrap"),
                    };
                    html! {
                        <div key={i} class={row}><div class={bubble}>{ &m.text }</div></div>
                    }
                }) }
                {
                    if chat.waiting {
                        html! {
                            <div class="flex justify-start">
                                <div class="rounded-2xl rounded-tl-none p-4 flex gap-1 border border-border-light dark:border-border-dark">
                                    <span class="w-1.5 h-1.5 bg-primary rounded-full animate-bounce"></span>
                                    <span class="w-1.5 h-1.5 bg-primary rounded-full animate-bounce"></span>
                                    <span class="w-1.5 h-1.5 bg-primary rounded-full animate-bounce"></span>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <form onsubmit={on_send} class="p-4 border-t border-border-light dark:border-border-dark flex gap-2">
                <input type="text" placeholder="Pregunta algo sobre tus finanzas..."
                    value={(*input).clone()} oninput={on_input}
                    class="flex-1 bg-white dark:bg-background-dark border border-border-light dark:border-border-dark rounded-xl px-4 py-3 outline-none text-sm" />
                <button type="submit" disabled={chat.waiting} class="bg-primary text-[#102216] p-3 rounded-xl shadow-lg shadow-primary/20 disabled:opacity-50">
                    { icon_send() }
                </button>
            </form>
        </>
    }
}

#[derive(Clone, PartialEq)]
struct SelectedFile {
    name: String,
    data_url: String,
}

#[derive(Properties, PartialEq)]
struct MediaPanelProps {
    video: bool,
}

#[function_component(MediaPanel)]
fn media_panel(props: &MediaPanelProps) -> Html {
    let selected = use_state(|| None::<SelectedFile>);
    let result = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let video = props.video;

    let on_file = {
        let selected = selected.clone();
        let result = result.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let file = gloo::file::File::from(file);
            let selected = selected.clone();
            result.set(None);
            spawn_local(async move {
                match gloo::file::futures::read_as_data_url(&file).await {
                    Ok(data_url) => selected.set(Some(SelectedFile {
                        name: file.name(),
                        data_url,
                    })),
                    Err(e) => log::error!("could not read {}: {}", file.name(), e),
                }
            });
        })
    };

    let on_analyze = {
        let selected = selected.clone();
        let result = result.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let Some(file) = (*selected).clone() else {
                return;
            };
            if *loading {
                return;
            }
            let Some((mime, data)) = split_data_url(&file.data_url) else {
                log::warn!("{} is not a base64 data url", file.name);
                result.set(Some(ANALYSIS_FAILED.to_string()));
                return;
            };

            loading.set(true);
            result.set(Some("Analizando con Gemini...".to_string()));
            let result = result.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let client = client();
                let outcome = if video {
                    client.analyze_video(&data, &mime, "").await
                } else {
                    client.analyze_image(&data, &mime, "").await
                };
                let text = match outcome {
                    Ok(text) => text,
                    Err(e) => {
                        log::error!("analysis of {} failed: {}", file.name, e);
                        ANALYSIS_FAILED.to_string()
                    }
                };
                result.set(Some(text));
                loading.set(false);
            });
        })
    };

    let (title, accept) = if video {
        ("Entiende videos educativos", "video/*")
    } else {
        ("Analiza tus Documentos", "image/*")
    };

    let preview = match &*selected {
        Some(file) if !video => html! { <img src={file.data_url.clone()} class="max-h-48 rounded-lg shadow-md" alt="Vista previa" /> },
        Some(file) => html! {
            <div class="flex items-center gap-2 text-primary font-bold">{ icon_check_circle() }{ format!("Video Cargado: {}", file.name) }</div>
        },
        None => html! {
            <>
                { icon_upload() }
                <span class="text-sm font-bold opacity-50">{"Click para seleccionar archivo"}</span>
            </>
        },
    };

    html! {
        <div class="flex-1 overflow-y-auto p-8 flex flex-col items-center gap-8">
            <div class="flex flex-col items-center gap-4 text-center max-w-lg">
                <h2 class="text-xl font-bold">{ title }</h2>
                <p class="text-sm opacity-70">{"Sube un archivo y Gemini lo analizará por ti en segundos."}</p>
            </div>

            <div class="w-full max-w-xl flex flex-col gap-6">
                <label class="relative border-2 border-dashed border-border-light dark:border-border-dark rounded-2xl p-10 flex flex-col items-center gap-4 hover:border-primary cursor-pointer">
                    <input type="file" accept={accept} onchange={on_file} class="absolute inset-0 w-full h-full opacity-0 cursor-pointer" />
                    { preview }
                </label>

                {
                    if selected.is_some() {
                        html! {
                            <button onclick={on_analyze} disabled={*loading} class="w-full bg-primary text-[#102216] font-bold py-4 rounded-xl shadow-lg shadow-primary/20 disabled:opacity-50 flex items-center justify-center gap-2">
                                { icon_sparkles() }
                                { if *loading { "Analizando..." } else { "Comenzar Análisis IA" } }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(text) = &*result {
                        html! {
                            <div class="border border-border-light dark:border-border-dark rounded-2xl p-6">
                                <h4 class="font-bold mb-4 text-primary">{"Resultado del Análisis"}</h4>
                                <div class="text-sm leading-relaxed whitespace-pre-wrap">{ text.clone() }</div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_log_starts_with_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].role, Role::Model);
        assert!(!log.waiting);
    }

    #[test]
    fn asking_waits_until_the_reply() {
        let log = Rc::new(ChatLog::default()).reduce(ChatAction::Ask("hola".into()));
        assert!(log.waiting);
        let log = log.reduce(ChatAction::Reply(Message::new(Role::Model, "¡Hola!")));
        assert!(!log.waiting);
        let roles: Vec<Role> = log.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Model, Role::User, Role::Model]);
    }

    #[test]
    fn failures_map_to_marked_replies() {
        let ok = reply_message(Ok("ok".into()));
        assert_eq!((ok.text.as_str(), ok.failed), ("ok", false));

        let empty = reply_message(Err(AssistantError::Empty));
        assert_eq!((empty.text.as_str(), empty.failed), (EMPTY_REPLY, true));

        let offline = reply_message(Err(AssistantError::MissingApiKey));
        assert_eq!(offline.text, CONNECTION_FAILED);
        assert_eq!(offline.role, Role::Model);
        assert!(offline.failed);
    }
}
