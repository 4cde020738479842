use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Anchor,
    Ship,
    Star,
    CreditCard,
    Envelope,
    Lock,
    Bars,
    Close,
    Filter,
    Info,
    Phone,
}

impl Glyph {
    fn fa_class(self) -> &'static str {
        match self {
            Glyph::Anchor => "fa-solid fa-anchor",
            Glyph::Ship => "fa-solid fa-ship",
            Glyph::Star => "fa-solid fa-star",
            Glyph::CreditCard => "fa-solid fa-credit-card",
            Glyph::Envelope => "fa-solid fa-envelope",
            Glyph::Lock => "fa-solid fa-lock",
            Glyph::Bars => "fa-solid fa-bars",
            Glyph::Close => "fa-solid fa-xmark",
            Glyph::Filter => "fa-solid fa-filter",
            Glyph::Info => "fa-solid fa-circle-info",
            Glyph::Phone => "fa-solid fa-phone",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <i class={classes!(props.glyph.fa_class(), props.class.clone())} aria-hidden="true"></i>
    }
}
