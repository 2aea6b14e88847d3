//!
//! The JSON-RPC over HTTP node client.
//!

pub mod request;
pub mod response;

use std::cell::Cell;
use std::str::FromStr;
use std::time::Duration;

use crate::chain::Block;
use crate::chain::Receipt;
use crate::chain::Transaction;
use crate::client::Client;
use crate::client::Error;

use self::request::Request;
use self::response::Response;

///
/// The JSON-RPC over HTTP node client.
///
#[derive(Debug)]
pub struct HttpClient {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The node endpoint.
    url: reqwest::Url,
    /// The next JSON-RPC request identifier.
    next_id: Cell<usize>,
}

impl HttpClient {
    /// The default local development node endpoint.
    pub const DEFAULT_URL: &'static str = "http://127.0.0.1:8545";

    ///
    /// A shortcut constructor.
    ///
    /// The request timeout is disabled, so an unresponsive node stalls the caller.
    ///
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let url = reqwest::Url::from_str(url)
            .map_err(|error| anyhow::anyhow!("Node URL `{url}` is invalid: {error}"))?;

        let mut http_client_builder = reqwest::blocking::ClientBuilder::new();
        http_client_builder = http_client_builder.connect_timeout(Duration::from_secs(60));
        http_client_builder = http_client_builder.pool_idle_timeout(Duration::from_secs(60));
        http_client_builder = http_client_builder.timeout(None);
        let http_client = http_client_builder.build()?;

        Ok(Self {
            http_client,
            url,
            next_id: Cell::new(1),
        })
    }

    ///
    /// Checks that the endpoint speaks JSON-RPC and returns the node version string.
    ///
    pub fn probe(&self) -> Result<String, Error> {
        self.request::<_, String>("web3_clientVersion", request::NO_PARAMS)?
            .ok_or_else(|| Error::malformed("web3_clientVersion", "empty result"))
    }

    ///
    /// Sends a JSON-RPC request and deserializes its result.
    ///
    /// A `null` result is returned as `None`.
    ///
    fn request<P, R>(&self, method: &str, params: P) -> Result<Option<R>, Error>
    where
        P: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let request = Request::new(id, method, params);
        log::trace!("RPC request #{id} `{method}`");
        let response: Response = self
            .http_client
            .post(self.url.clone())
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;
        response.into_result(method)
    }
}

impl Client for HttpClient {
    fn block_number(&self) -> Result<u64, Error> {
        let number: web3::types::U64 = self
            .request("eth_blockNumber", request::NO_PARAMS)?
            .ok_or_else(|| Error::malformed("eth_blockNumber", "empty result"))?;
        Ok(number.as_u64())
    }

    fn block(&self, number: u64) -> Result<Option<Block>, Error> {
        const METHOD: &str = "eth_getBlockByNumber";

        let block: Option<web3::types::Block<web3::types::H256>> =
            self.request(METHOD, (web3::types::U64::from(number), false))?;
        block
            .map(Block::try_from)
            .transpose()
            .map_err(|error| Error::malformed(METHOD, error))
    }

    fn transaction(&self, hash: &web3::types::H256) -> Result<Option<Transaction>, Error> {
        let transaction: Option<web3::types::Transaction> =
            self.request("eth_getTransactionByHash", (hash,))?;
        Ok(transaction.map(Transaction::from))
    }

    fn receipt(&self, hash: &web3::types::H256) -> Result<Option<Receipt>, Error> {
        const METHOD: &str = "eth_getTransactionReceipt";

        let receipt: Option<web3::types::TransactionReceipt> = self.request(METHOD, (hash,))?;
        receipt
            .map(Receipt::try_from)
            .transpose()
            .map_err(|error| Error::malformed(METHOD, error))
    }

    fn code(&self, address: &web3::types::Address) -> Result<Vec<u8>, Error> {
        let code: Option<web3::types::Bytes> =
            self.request("eth_getCode", (address, "latest"))?;
        Ok(code.map(|code| code.0).unwrap_or_default())
    }
}
