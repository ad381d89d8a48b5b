use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use colored::Colorize;
use wardrobe_server::{
    ClothingItemDto, ClothingItemListDto, CreateClothingItemRequest, ServerConfig,
    UpdateClothingItemRequest, WardrobeServer,
};
use wardrobe_store::{Document, JsonFileDocument, RecordStore};
use wardrobe_types::{ClothingItem, ItemId};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let data = cli
        .data
        .clone()
        .unwrap_or_else(|| ServerConfig::default().data_file);
    let format = cli.format;

    match cli.command {
        Command::Init => cmd_init(&data),
        Command::Serve(args) => cmd_serve(args, cli.data),
        Command::List => {
            let listed = RecordStore::open_file(&data)
                .list_active()
                .with_context(|| format!("failed to list items in {}", data.display()))?;
            print_list(&ClothingItemListDto::from(listed), &format)
        }
        Command::Show(args) => {
            let item = show_item(&RecordStore::open_file(&data), &args.id)?;
            print_item(&item, &format)
        }
        Command::Add(args) => {
            let item = add_item(&RecordStore::open_file(&data), args)?;
            if matches!(format, OutputFormat::Text) {
                println!("{} Added item {}", "✓".green().bold(), item.id().to_string().yellow());
            }
            print_item(&item, &format)
        }
        Command::Update(args) => {
            let item = update_item(&RecordStore::open_file(&data), args)?;
            if matches!(format, OutputFormat::Text) {
                println!("{} Updated item {}", "✓".green().bold(), item.id().to_string().yellow());
            }
            print_item(&item, &format)
        }
        Command::Delete(args) => {
            let id = delete_item(&RecordStore::open_file(&data), &args.id)?;
            print_deleted(&id, &format)
        }
    }
}

fn cmd_init(data: &Path) -> anyhow::Result<()> {
    let document = JsonFileDocument::new(data);
    let created = document
        .initialize()
        .with_context(|| format!("failed to initialize {}", data.display()))?;
    if created {
        println!("{} Initialized item document {}", "✓".green().bold(), data.display().to_string().bold());
    } else {
        println!("Item document {} already exists", data.display().to_string().bold());
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs, data: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    if let Some(data) = data {
        config.data_file = data;
    }

    println!(
        "Wardrobe server on {} (data: {})",
        config.bind_addr.to_string().bold(),
        config.data_file.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(WardrobeServer::new(config).serve())?;
    Ok(())
}

fn show_item<D: Document>(store: &RecordStore<D>, raw_id: &str) -> anyhow::Result<ClothingItem> {
    let id = ItemId::parse(raw_id)?;
    store
        .get_active(&id)
        .with_context(|| format!("cannot show item {raw_id}"))
}

fn add_item<D: Document>(store: &RecordStore<D>, args: AddArgs) -> anyhow::Result<ClothingItem> {
    let request = CreateClothingItemRequest {
        category: Some(args.category),
        colour: Some(args.colour),
        user_id: Some(args.user_id),
        brand: Some(args.brand),
        size: Some(args.size),
        image_url: Some(args.image_url),
        purchase_date: Some(args.purchase_date),
        purchase_price: Some(args.price),
    };
    let fields = request.validate().map_err(invalid_input)?;
    store.create(fields).context("cannot add item")
}

fn update_item<D: Document>(store: &RecordStore<D>, args: UpdateArgs) -> anyhow::Result<ClothingItem> {
    let id = ItemId::parse(&args.id)?;
    let request = UpdateClothingItemRequest {
        category: args.category,
        colour: args.colour,
        user_id: args.user_id,
        brand: args.brand,
        size: args.size,
        image_url: args.image_url,
        purchase_date: args.purchase_date,
        purchase_price: args.price,
    };
    let patch = request.validate().map_err(invalid_input)?;
    store
        .update(&id, &patch)
        .with_context(|| format!("cannot update item {id}"))
}

fn delete_item<D: Document>(store: &RecordStore<D>, raw_id: &str) -> anyhow::Result<ItemId> {
    let id = ItemId::parse(raw_id)?;
    store
        .soft_delete(&id)
        .with_context(|| format!("cannot delete item {id}"))?;
    Ok(id)
}

fn invalid_input(errors: Vec<String>) -> anyhow::Error {
    anyhow!("invalid input: {}", errors.join("; "))
}

fn print_item(item: &ClothingItem, format: &OutputFormat) -> anyhow::Result<()> {
    let dto = ClothingItemDto::from(item);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dto)?),
        OutputFormat::Text => print_item_text(&dto),
    }
    Ok(())
}

fn print_item_text(dto: &ClothingItemDto) {
    println!("{}  {}", dto.id.to_string().yellow().bold(), dto.category.to_string().cyan());
    println!("  Brand: {}  Colour: {}  Size: {}", dto.brand, dto.colour, dto.size);
    println!("  Owner: {}", dto.user_id);
    println!(
        "  Bought: {} for {:.2}",
        dto.purchase_date.format("%Y-%m-%d"),
        dto.purchase_price
    );
    println!("  Image: {}", dto.image_url.blue());
}

fn deleted_json(id: &ItemId) -> serde_json::Value {
    serde_json::json!({ "id": id, "deleted": true })
}

fn print_deleted(id: &ItemId, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deleted_json(id))?),
        OutputFormat::Text => {
            println!("{} Deleted item {}", "✓".green().bold(), id.to_string().yellow())
        }
    }
    Ok(())
}

fn print_list(list: &ClothingItemListDto, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(list)?),
        OutputFormat::Text => {
            if list.data.is_empty() {
                println!("No items.");
            }
            for dto in &list.data {
                println!(
                    "{} {:<12} {} {} ({})",
                    dto.id.short_id().yellow(),
                    dto.category.to_string().cyan(),
                    dto.brand.bold(),
                    dto.colour,
                    dto.size
                );
            }
            println!("{} item(s)", list.count.to_string().bold());
        }
    }
    Ok(())
}
