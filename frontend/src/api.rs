use gloo_net::http::{Request, Response};
use shared::{
    DataGateway, Error, Result, VoteStore,
    models::{NewVote, Product, ProductId, VoteListing, VoteReceipt},
};

async fn get(url: &str) -> Result<Response> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| Error::transport(e.to_string()))?;

    if !response.ok() {
        return Err(Error::fetch_failed(url, response.status()));
    }
    Ok(response)
}

/// Reads the static product and category endpoints.
pub struct HttpGateway;

impl DataGateway for HttpGateway {
    async fn fetch_list(&self, url: &str) -> Result<Vec<Product>> {
        get(url)
            .await?
            .json::<Vec<Product>>()
            .await
            .map_err(|e| Error::malformed(e.to_string()))
    }

    async fn fetch_tree(&self, url: &str) -> Result<String> {
        get(url)
            .await?
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}

/// Client for the vote store API. Error statuses still carry a JSON body,
/// so the body is decoded whatever the status code. An error status whose
/// body does not decode means the store itself is unreachable.
pub struct HttpVoteStore {
    base_url: &'static str,
}

impl HttpVoteStore {
    pub const fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    fn votes_url(&self) -> String {
        format!("{}/votes", self.base_url)
    }
}

impl VoteStore for HttpVoteStore {
    async fn record_vote(&self, product_id: &ProductId) -> Result<VoteReceipt> {
        let request = Request::post(&self.votes_url())
            .json(&NewVote { product_id: Some(product_id.clone()) })
            .map_err(|e| Error::malformed(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        let status = response.status();

        response
            .json::<VoteReceipt>()
            .await
            .map_err(|e| Error::unreadable_store_reply(status, e))
    }

    async fn list_votes(&self) -> Result<VoteListing> {
        let response = Request::get(&self.votes_url())
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        let status = response.status();

        response
            .json::<VoteListing>()
            .await
            .map_err(|e| Error::unreadable_store_reply(status, e))
    }
}
