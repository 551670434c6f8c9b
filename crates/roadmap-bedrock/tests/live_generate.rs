//! Live roadmap generation against Bedrock.
//!
//! Requires valid AWS credentials and model access in the environment.
//!
//! Run with: `cargo test -p roadmap-bedrock --test live_generate -- --ignored`

use roadmap_bedrock::generate::BedrockGenerator;
use roadmap_core::models::request::RoadmapRequest;
use roadmap_core::parse::parse_roadmap;

#[tokio::test]
#[ignore]
async fn generates_a_parseable_roadmap() {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;
    let generator =
        BedrockGenerator::new(&config, "us.anthropic.claude-sonnet-4-20250514-v1:0");

    let request = RoadmapRequest::parse("Rust", "3", "Beginner").unwrap();
    let text = generator.generate_roadmap(&request).await.unwrap();
    println!("{text}");

    let roadmap = parse_roadmap(&text);
    assert!(roadmap.get("Day 1").is_some(), "no Day 1 in:\n{text}");
}
