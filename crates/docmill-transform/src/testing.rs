//! Page tree fixtures shared by the unit tests.

use docmill_pages::{ClasslikeKind, ContentPage, Dri, PageNode, RootPage};

pub(crate) fn member(class: &str, name: &str) -> ContentPage {
    ContentPage::new(
        name,
        Dri::new("com.example")
            .with_class_names(class)
            .with_callable(format!("{name}()")),
    )
    .with_source_set("jvm")
}

pub(crate) fn classlike(name: &str, kind: ClasslikeKind) -> ContentPage {
    ContentPage::new(name, Dri::new("com.example").with_class_names(name))
        .with_kind(kind)
        .with_source_set("jvm")
}

pub(crate) fn entry(class: &str, name: &str) -> ContentPage {
    ContentPage::new(
        name,
        Dri::new("com.example")
            .with_class_names(format!("{class}.{name}"))
            .with_extra("entry"),
    )
    .with_kind(ClasslikeKind::EnumEntry)
    .with_source_set("jvm")
}

/// Module `sample` with one package holding an enum, a class, an interface
/// and a top-level function.
pub(crate) fn sample_root() -> RootPage {
    let color = classlike("Color", ClasslikeKind::Enum)
        .with_child(entry("Color", "RED"))
        .with_child(member("Color", "values"))
        .with_child(entry("Color", "BLUE"));
    let runner = classlike("Runner", ClasslikeKind::Class)
        .with_child(member("Runner", "run"))
        .with_child(member("Runner", "stop"));
    let source = classlike("Source", ClasslikeKind::Interface).with_child(member("Source", "read"));
    let package = ContentPage::new("com.example", Dri::new("com.example"))
        .with_source_set("jvm")
        .with_child(runner)
        .with_child(color)
        .with_child(ContentPage::new(
            "launch",
            Dri::new("com.example").with_callable("launch()"),
        ))
        .with_child(source);
    let module = ContentPage::new("sample", Dri::default())
        .with_source_set("jvm")
        .with_child(package);
    RootPage::new(vec![module.into()])
}

pub(crate) fn child_names(root: &RootPage) -> Vec<&str> {
    root.children.iter().map(PageNode::name).collect()
}
