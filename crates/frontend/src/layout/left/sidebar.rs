//! Sidebar component with collapsible menu groups

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    category: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (href, label)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            category: "Main",
            label: "Dashboard",
            icon: "menu",
            items: vec![("/teknisi/tampil", "Dashboard")],
        },
        MenuGroup {
            id: "teknisi",
            category: "Management",
            label: "Teknisi",
            icon: "users",
            items: vec![
                ("/teknisi/tampil", "Data Teknisi"),
                ("/teknisi/tambah", "Tambah Teknisi"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let expanded_groups = RwSignal::new(vec!["teknisi"]);

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let MenuGroup { id: group_id, category, label, icon: group_icon, items } = group;
                let is_expanded = move || expanded_groups.with(|g| g.contains(&group_id));

                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__category">{category}</div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            {icon(group_icon)}
                            <span class="app-sidebar__label">{label}</span>
                            <span class="app-sidebar__chevron" class:app-sidebar__chevron--open=is_expanded>
                                {icon("chevron-right")}
                            </span>
                        </div>
                        <Show when=is_expanded>
                            {items.iter().map(|(href, label)| {
                                let href = *href;
                                let label = *label;
                                view! {
                                    <A
                                        href=href
                                        attr:class=move || {
                                            if pathname.get() == href {
                                                "app-sidebar__link app-sidebar__link--active"
                                            } else {
                                                "app-sidebar__link"
                                            }
                                        }
                                    >
                                        {label}
                                    </A>
                                }
                            }).collect_view()}
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
