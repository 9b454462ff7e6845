// Render -> request -> decode scenarios across the whole crate.

use menu_shared::RenderKitConfig;

use crate::adapters::{NamingFormLocator, OutcomeNavigationResolver};
use crate::domain::{
    ClientBehavior, ConfirmBehavior, EventPhase, MenuActionEvent, MenuComponent, MenuGroup, MenuItem,
    MenuItemHolder, MenuModel, Separator,
};
use crate::markup::ResponseWriter;
use crate::services::{
    MenuDispatcher, MenuRenderer, PhasedEventQueue, RenderCollaborators, RequestParams,
};

const HOLDER: &str = "main:form:menu";

fn dynamic_component() -> MenuComponent {
    let mut model = MenuModel::new()
        .with(MenuItem::new("dashboard").outcome("dashboard").label("Dashboard"))
        .with(Separator::new().style_class("wide"))
        .with(
            MenuGroup::new("edit")
                .label("Edit")
                .child(MenuItem::new("copy").label("Copy").dynamic(true).immediate(true))
                .child(
                    MenuItem::new("delete")
                        .label("Delete")
                        .dynamic(true)
                        .ajax(false)
                        .param("scope", "all")
                        .on_click(ClientBehavior::Confirm(ConfirmBehavior::new("Delete all?"))),
                ),
        );
    model.generate_unique_ids();
    MenuComponent::new(HOLDER, model)
}

fn renderer(config: &RenderKitConfig) -> MenuRenderer {
    MenuRenderer::new(
        config.menu.clone(),
        RenderCollaborators::with_defaults(
            OutcomeNavigationResolver::new("/app", ".xhtml"),
            NamingFormLocator::new(["main:form"]),
        ),
    )
}

fn submit(address: &str) -> RequestParams {
    RequestParams::from([(format!("{}_menuid", HOLDER), address.to_string())])
}

#[test]
fn test_rendered_menu_ids_decode_back_to_items() -> anyhow::Result<()> {
    let component = dynamic_component();
    let mut w = ResponseWriter::buffer();
    renderer(&RenderKitConfig::default()).encode_menu(&mut w, &component)?;
    let html = w.as_str();

    // dynamic items carry their path id in the synthetic parameter
    assert!(html.contains("&quot;name&quot;:&quot;main:form:menu_menuid&quot;,&quot;value&quot;:&quot;2_0&quot;"));
    assert!(html.contains("&quot;main:form:menu_menuid&quot;:&quot;2_1&quot;"));
    assert!(html.contains(r#"href="/app/dashboard.xhtml""#));
    assert!(html.contains(r#"<li class="ui-separator ui-state-default wide"></li>"#));

    let dispatcher = MenuDispatcher::new();
    for (path, item) in component.model.items() {
        let mut queue = PhasedEventQueue::new();
        dispatcher.decode(&component, &submit(&item.id), &mut queue)?;

        let events = queue.drain_all();
        assert_eq!(events.len(), 1, "no event for {}", path);
        assert_eq!(events[0].item.id, path.encode());
        assert_eq!(events[0].source, component.client_id());
    }
    Ok(())
}

#[test]
fn test_confirmation_guards_dynamic_submit() -> anyhow::Result<()> {
    let component = dynamic_component();
    let delete = component.model.items()[2].1.clone();

    let attrs = renderer(&RenderKitConfig::default())
        .encoder()
        .action_attributes(HOLDER, &delete)?;

    let pending = attrs.confirm_command.expect("pending command");
    let onclick = attrs.onclick.expect("onclick");
    assert!(pending.starts_with(r#"PrimeFaces.addSubmitParam("main:form""#));
    assert!(pending.contains(r#""scope":"all""#));
    assert!(onclick.starts_with("PrimeFaces.confirm("));
    assert!(onclick.contains(r#""source":"2_1""#));
    Ok(())
}

#[test]
fn test_event_phases_follow_immediate_flag() -> anyhow::Result<()> {
    let component = dynamic_component();
    let dispatcher = MenuDispatcher::new();
    let mut queue = PhasedEventQueue::new();

    assert_eq!(
        dispatcher.decode(&component, &submit("2_1"), &mut queue)?,
        Some(EventPhase::Deferred)
    );
    assert_eq!(
        dispatcher.decode(&component, &submit("2_0"), &mut queue)?,
        Some(EventPhase::Early)
    );

    let ids: Vec<_> = queue.drain_all().into_iter().map(|e| e.item.id).collect();
    assert_eq!(ids, vec!["2_0", "2_1"]);
    Ok(())
}

#[test]
fn test_stale_and_malformed_addresses() -> anyhow::Result<()> {
    let component = dynamic_component();
    let dispatcher = MenuDispatcher::new();
    let mut queue = PhasedEventQueue::new();

    assert_eq!(dispatcher.decode(&component, &submit("7_3"), &mut queue)?, None);
    assert!(dispatcher.decode(&component, &submit("2"), &mut queue).is_err());
    assert!(dispatcher.decode(&component, &submit("2_one"), &mut queue).is_err());
    assert!(queue.is_empty());
    Ok(())
}

#[test]
fn test_configured_classes_reach_markup() -> anyhow::Result<()> {
    let config = RenderKitConfig::from_toml(
        r#"
        [menu]
        separator_class = "divider"
        list_class = "nav"
        "#,
    )?;
    let component = MenuComponent::new(
        HOLDER,
        MenuModel::new()
            .with(MenuItem::new("a").url("/a"))
            .with(Separator::new().style("height:2px")),
    );

    let mut w = ResponseWriter::buffer();
    renderer(&config).encode_menu(&mut w, &component)?;
    let html = w.as_str();
    assert!(html.starts_with(r#"<ul class="nav">"#));
    assert!(html.contains(r#"<li class="divider" style="height:2px"></li>"#));
    Ok(())
}

#[test]
fn test_menu_from_json_renders_and_decodes() -> anyhow::Result<()> {
    let model: MenuModel = serde_json::from_str(
        r#"[
            {"type": "item", "id": "new", "client_id": "main:form:menu:new", "ajax": false, "value": "New"},
            {"type": "group", "id": "more", "label": "More", "elements": [
                {"type": "item", "id": "help", "url": "/help", "target": "_blank"}
            ]}
        ]"#,
    )?;
    let component = MenuComponent::new(HOLDER, model);

    let mut w = ResponseWriter::buffer();
    renderer(&RenderKitConfig::default()).encode_menu(&mut w, &component)?;
    let html = w.as_str();
    assert!(html.contains("&quot;main:form:menu:new&quot;:&quot;main:form:menu:new&quot;"));
    assert!(html.contains(r#"href="/help" target="_blank""#));

    let mut events: Vec<MenuActionEvent> = Vec::new();
    MenuDispatcher::new().decode(&component, &submit("1_0"), &mut events)?;
    assert_eq!(events[0].item.url.as_deref(), Some("/help"));
    Ok(())
}

#[test]
fn test_demo_menu_dynamic_ids_decode_to_themselves() -> anyhow::Result<()> {
    let model: MenuModel = serde_json::from_str(include_str!("../../../../demos/menu.json"))?;
    let component = MenuComponent::new(HOLDER, model);
    let dispatcher = MenuDispatcher::new();

    let dynamic: Vec<_> = component
        .model
        .items()
        .into_iter()
        .filter(|(_, item)| item.dynamic)
        .collect();
    assert_eq!(dynamic.len(), 3);

    for (_, item) in dynamic {
        let mut events: Vec<MenuActionEvent> = Vec::new();
        dispatcher.decode(&component, &submit(&item.id), &mut events)?;
        assert_eq!(events.len(), 1, "{} does not decode", item.id);
        assert_eq!(events[0].item.id, item.id);
    }
    Ok(())
}
