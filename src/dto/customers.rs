use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Customer;

/// Contact and address fields; the id is assigned on creation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CustomerRequest {
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
}

impl CustomerRequest {
    pub fn into_customer(self, id: uuid::Uuid) -> Customer {
        Customer {
            id,
            nome: self.nome,
            telefone: self.telefone,
            cep: self.cep,
            endereco: self.endereco,
            numero: self.numero,
            complemento: self.complemento,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerList {
    #[schema(value_type = Vec<Customer>)]
    pub items: Vec<Customer>,
}
