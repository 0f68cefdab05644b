//! Chat Widget
//!
//! Floating support chat on the landing page. Messages live only in this
//! component; replies are canned until a human picks the thread up.

use leptos::*;

const BOT_REPLIES: [&str; 4] = [
    "Thanks for your question! Our support team can help with that.",
    "I've noted your inquiry. Would you like me to connect you with a specialist?",
    "That's a great question! Let me find the best resources for you.",
    "A specialist will follow up shortly. Anything else I can note down?",
];

#[derive(Clone)]
struct ChatMessage {
    text: String,
    from_user: bool,
}

/// Floating chat panel with toggle button
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (input, set_input) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = input.get().trim().to_string();
        if text.is_empty() {
            return;
        }

        let reply_index = messages.get().iter().filter(|m| m.from_user).count();
        set_messages.update(|m| {
            m.push(ChatMessage {
                text,
                from_user: true,
            })
        });
        set_input.set(String::new());

        gloo_timers::callback::Timeout::new(1000, move || {
            set_messages.update(|m| {
                m.push(ChatMessage {
                    text: BOT_REPLIES[reply_index % BOT_REPLIES.len()].to_string(),
                    from_user: false,
                })
            });
        })
        .forget();
    };

    view! {
        <div class="chat-widget">
            <button
                class="chat-fab"
                aria-label="Open support chat"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "💬"
            </button>

            {move || {
                if !open.get() {
                    return view! {}.into_view();
                }

                view! {
                    <div class="chat-panel open">
                        <div class="chat-header">
                            <span>"Support"</span>
                            <button
                                class="chat-close"
                                aria-label="Close chat"
                                on:click=move |_| set_open.set(false)
                            >
                                "×"
                            </button>
                        </div>

                        <div class="chat-body">
                            {move || {
                                let msgs = messages.get();
                                if msgs.is_empty() {
                                    view! {
                                        <p class="chat-empty">"Ask us anything about Market Llama."</p>
                                    }.into_view()
                                } else {
                                    msgs.into_iter().map(|msg| {
                                        let who = if msg.from_user { "user" } else { "bot" };
                                        view! {
                                            <div class=format!("chat-msg {}", who)>{msg.text}</div>
                                        }
                                    }).collect_view()
                                }
                            }}
                        </div>

                        <form class="chat-form" on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Type a message..."
                                prop:value=move || input.get()
                                on:input=move |ev| set_input.set(event_target_value(&ev))
                            />
                            <button type="submit">"Send"</button>
                        </form>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
