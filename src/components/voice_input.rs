//! Voice Input Component
//!
//! Push-to-talk speech capture on top of the browser SpeechRecognition API.
//! Non-continuous, final results only: one successful recognition emits one
//! transcript and the control returns to idle. Errors and end-of-speech also
//! return to idle without emitting.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Recognition language
const SPEECH_LANG: &str = "en-US";

/// Microphone toggle button that emits transcribed text.
///
/// If the browser exposes no speech recognition, the button renders disabled
/// and explains itself when pressed.
#[component]
pub fn VoiceInput(
    #[prop(into)] on_transcript: Callback<String>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let (listening, set_listening) = create_signal(false);

    let recognition = store_value(new_recognition());
    let supported = recognition.with_value(|r| r.is_some());

    recognition.with_value(|r| {
        if let Some(rec) = r {
            rec.set_lang(SPEECH_LANG);
            rec.set_continuous(false);
            rec.set_interim_results(false);

            let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if let Some(text) = final_transcript(&event) {
                    on_transcript.call(text);
                }
                set_listening.set(false);
            });
            rec.set_onresult(Some(on_result.as_ref().unchecked_ref()));
            on_result.forget();

            let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                log::warn!("speech recognition error: {:?}", event);
                set_listening.set(false);
            });
            rec.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_error.forget();

            let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                set_listening.set(false);
            });
            rec.set_onend(Some(on_end.as_ref().unchecked_ref()));
            on_end.forget();
        }
    });

    on_cleanup(move || {
        recognition.with_value(|r| {
            if let Some(rec) = r {
                rec.stop();
            }
        });
    });

    let toggle = move |_| {
        recognition.with_value(|r| match r {
            Some(rec) => {
                if listening.get() {
                    rec.stop();
                    set_listening.set(false);
                } else {
                    rec.start();
                    set_listening.set(true);
                }
            }
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Voice input is not supported in this browser");
                }
            }
        });
    };

    view! {
        <button
            type="button"
            on:click=toggle
            disabled=move || disabled.get() || !supported
            title=move || if listening.get() { "Stop recording" } else { "Start voice input" }
            class=move || {
                let base = "p-3 rounded-full text-white transition-colors \
                            disabled:bg-gray-400 disabled:cursor-not-allowed";
                if listening.get() {
                    format!("{} bg-red-500 hover:bg-red-600", base)
                } else {
                    format!("{} bg-blue-500 hover:bg-blue-600", base)
                }
            }
        >
            {move || if listening.get() { "⏹" } else { "🎤" }}
        </button>
    }
}

/// Bindings are structural: the instance comes from whichever constructor the
/// browser exposes, standard or webkit-prefixed.
#[wasm_bindgen]
extern "C" {
    type Recognition;

    #[wasm_bindgen(method, structural)]
    fn start(this: &Recognition);

    #[wasm_bindgen(method, structural)]
    fn stop(this: &Recognition);

    #[wasm_bindgen(method, setter, structural)]
    fn set_lang(this: &Recognition, lang: &str);

    #[wasm_bindgen(method, setter, structural)]
    fn set_continuous(this: &Recognition, continuous: bool);

    #[wasm_bindgen(method, setter, structural, js_name = interimResults)]
    fn set_interim_results(this: &Recognition, interim: bool);

    #[wasm_bindgen(method, setter, structural)]
    fn set_onresult(this: &Recognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter, structural)]
    fn set_onerror(this: &Recognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter, structural)]
    fn set_onend(this: &Recognition, handler: Option<&js_sys::Function>);
}

/// Construct a recognizer if the capability is present
fn new_recognition() -> Option<Recognition> {
    let window = web_sys::window()?;
    let ctor = ["SpeechRecognition", "webkitSpeechRecognition"]
        .iter()
        .find_map(|name| {
            js_sys::Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .filter(|v| v.is_function())
        })?;
    let ctor: js_sys::Function = ctor.unchecked_into();
    let instance = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()).ok()?;
    Some(instance.unchecked_into())
}

/// Extract `event.results[0][0].transcript` from a recognition result event
fn final_transcript(event: &JsValue) -> Option<String> {
    let results = js_sys::Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = js_sys::Reflect::get_u32(&results, 0).ok()?;
    let alternative = js_sys::Reflect::get_u32(&first, 0).ok()?;
    js_sys::Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}
