//! New Todo Form Component
//!
//! Text field plus submit button for adding a todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::ViewController;
use crate::list_view::ADD_BUTTON_LABEL;
use crate::store::TodoListStateStoreFields;

#[component]
pub fn NewTodoForm(controller: ViewController) -> impl IntoView {
    let state = *controller.state();
    let input_controller = controller.clone();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    view! {
        <form class="flex gap-2" on:submit=add_todo>
            <input
                class="p-2 border"
                type="text"
                prop:value=move || state.title().get()
                on:input=move |ev| input_controller.set_title(event_target_value(&ev))
            />
            <button type="submit" class="bg-gray-200 p-2">{ADD_BUTTON_LABEL}</button>
        </form>
    }
}
