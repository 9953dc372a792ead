use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_bell() -> Html {
    icon_base("M18 8a6 6 0 10-12 0c0 7-3 7-3 7h18s-3 0-3-7M13.7 21a2 2 0 01-3.4 0")
}
pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7M14 8h6v6")
}
pub fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7M14 16h6v-6")
}
pub fn icon_bank() -> Html {
    icon_base("M3 21h18M4 10h16M5 10v8M9 10v8M15 10v8M19 10v8M12 3l9 5H3z")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 12m-4 0a4 4 0 108 0 4 4 0 10-8 0")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
pub fn icon_book() -> Html {
    icon_base("M4 19.5A2.5 2.5 0 016.5 17H20V3H6.5A2.5 2.5 0 004 5.5zM20 17v4H6.5")
}
pub fn icon_users() -> Html {
    icon_base("M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8zM23 21v-2a4 4 0 00-3-3.9M16 3.1a4 4 0 010 7.8")
}
pub fn icon_sparkles() -> Html {
    icon_base("M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9zM19 17l.9 2.1L22 20l-2.1.9L19 23l-.9-2.1L16 20l2.1-.9z")
}
pub fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_menu() -> Html {
    icon_base("M3 6h18M3 12h18M3 18h18")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6")
}
pub fn icon_send() -> Html {
    icon_base("M22 2L11 13M22 2l-7 20-4-9-9-4z")
}
pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12")
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}
pub fn icon_check_circle() -> Html {
    icon_base("M22 11.1V12a10 10 0 11-5.9-9.1M22 4L12 14l-3-3")
}
pub fn icon_alert() -> Html {
    icon_base("M10.3 3.9L1.8 18a2 2 0 001.7 3h17a2 2 0 001.7-3L13.7 3.9a2 2 0 00-3.4 0zM12 9v4M12 17h.01")
}
pub fn icon_info() -> Html {
    icon_base("M12 12m-10 0a10 10 0 1020 0 10 10 0 10-20 0M12 16v-4M12 8h.01")
}
pub fn icon_trophy() -> Html {
    icon_base("M8 21h8M12 17v4M7 4h10v5a5 5 0 01-10 0zM17 5h3v2a3 3 0 01-3 3M7 5H4v2a3 3 0 003 3")
}
pub fn icon_arrow_right() -> Html {
    icon_base("M5 12h14M12 5l7 7-7 7")
}
