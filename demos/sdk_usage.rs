use gateway_sdk::GatewayClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GatewayClient::new("http://localhost:5000");

    println!("Checking gateway health...");
    let health = client.health().await?;
    println!("Gateway is {} (timestamp {})", health.status, health.timestamp);

    println!("Fetching post 1 through the gateway...");
    match client.posts(Some("1")).await {
        Ok(post) => println!("Post 1: {}", post["title"]),
        Err(e) => eprintln!("Error fetching post: {}", e),
    }

    println!("Listing blobs under media/ ...");
    match client.blobs(Some("media/"), None).await {
        Ok(listing) => println!("{}", serde_json::to_string_pretty(&listing)?),
        Err(e) => eprintln!("Error listing blobs: {}", e),
    }

    Ok(())
}
