//! Todo Item Component
//!
//! One row: status label, completion checkbox, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::ViewController;
use crate::list_view::{ItemView, DELETE_BUTTON_LABEL};

#[component]
pub fn TodoItem(item: ItemView, controller: ViewController) -> impl IntoView {
    let ItemView { id, label, checked, struck } = item;
    let row_class = if struck { "todo-item line-through" } else { "todo-item" };

    let toggle = {
        let controller = controller.clone();
        let id = id.clone();
        move |completed: bool| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move {
                controller.toggle(id, completed).await;
            });
        }
    };

    let delete = move |_: web_sys::MouseEvent| {
        let controller = controller.clone();
        let id = id.clone();
        spawn_local(async move {
            controller.delete(id).await;
        });
    };

    view! {
        <li class=row_class>
            <span>{label}</span>
            <input
                class="cursor-pointer"
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    // The store drives the box: undo the click until the update settles
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    let completed = input.checked();
                    input.set_checked(!completed);
                    toggle(completed);
                }
            />
            <span>" / "</span>
            <button on:click=delete>{DELETE_BUTTON_LABEL}</button>
        </li>
    }
}
